pub use crate::{
    error::Error,
    paint::Color,
    path::Point,
    surface::Surface,
    Item,
};
pub use roxmltree::Node;
pub use crate::util::int_attr;
