//! Parent and child relationships between resolutions.

pub mod parent_child;

pub use parent_child::{
  cell_to_center_child, cell_to_children, cell_to_children_size, cell_to_parent, children, parent,
};
