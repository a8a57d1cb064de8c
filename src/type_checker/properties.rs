use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::ast::types::ExpressionType;

lazy_static! {
    /// The properties a declaration may target, with the values they accept.
    pub static ref PROPERTY_LOOKUP: HashMap<&'static str, PropertyKind> = {
        let mut map = HashMap::new();
        map.insert("width", PropertyKind::Dimension);
        map.insert("height", PropertyKind::Dimension);
        map.insert("color", PropertyKind::Color);
        map.insert("background-color", PropertyKind::Color);
        map
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Anything but a color.
    Dimension,
    /// Colors only.
    Color,
}

impl PropertyKind {
    pub fn accepts(&self, value_type: ExpressionType) -> bool {
        match self {
            PropertyKind::Dimension => value_type != ExpressionType::Color,
            PropertyKind::Color => value_type == ExpressionType::Color,
        }
    }

    pub fn violation(&self) -> &'static str {
        match self {
            PropertyKind::Dimension => "color not allowed",
            PropertyKind::Color => "only colors allowed",
        }
    }
}
