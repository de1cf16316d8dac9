use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

/// An attribute of a relational schema, such as a column name.
///
/// Attributes are compared, ordered and hashed by name. Cloning is cheap,
/// because the name is shared.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Attribute {
    name: Rc<str>,
}

impl Attribute {
    /// Creates an attribute with the given name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Attribute {
            name: name.as_ref().into(),
        }
    }

    /// Returns the attribute's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Attribute { name: name.into() }
    }
}

impl From<String> for Attribute {
    fn from(name: String) -> Self {
        Attribute { name: name.into() }
    }
}

impl From<char> for Attribute {
    fn from(name: char) -> Self {
        Attribute {
            name: name.to_string().into(),
        }
    }
}

impl From<&Attribute> for Attribute {
    fn from(attr: &Attribute) -> Self {
        attr.clone()
    }
}

impl Borrow<str> for Attribute {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_name() {
        let mut attrs = vec![Attribute::from("zip"), "city".into(), 'A'.into()];
        attrs.sort();
        let names: Vec<_> = attrs.iter().map(Attribute::name).collect();
        assert_eq!(names, ["A", "city", "zip"]);
    }

    #[test]
    fn test_equal_names_are_equal_attributes() {
        assert_eq!(Attribute::new("id"), Attribute::from(String::from("id")));
        assert_eq!(Attribute::from('x').to_string(), "x");
    }
}
