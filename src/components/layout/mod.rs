//! Layout components shared across routes.

mod gated_layout;

pub(crate) use gated_layout::GatedLayout;
