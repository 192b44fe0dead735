//! Ready-made attribute schemas.
//!
//! The classic card game uses four attributes at three variations each;
//! the four- and five-variation presets extend it with extra colors,
//! shapes, and fills. `generated_schema` builds an anonymous schema of any
//! depth, handy for exercising the solver at sizes no printed deck covers.

use crate::schema::{AttributeSchema, NUMBER_ATTRIBUTE};

/// The traditional game: four attributes, three variations each.
#[must_use]
pub fn three_variation() -> AttributeSchema {
    AttributeSchema::builder()
        .attribute("colors", ["red", "blue", "yellow"])
        .attribute("shape", ["circle", "square", "diamond"])
        .attribute("fill", ["none", "stripe", "solid"])
        .attribute("number", ["one", "two", "three"])
        .build()
        .expect("preset schema is well-formed")
}

/// Four variations per attribute; hands of four.
#[must_use]
pub fn four_variation() -> AttributeSchema {
    AttributeSchema::builder()
        .attribute("colors", ["red", "blue", "yellow", "green"])
        .attribute("shape", ["circle", "square", "diamond", "oval"])
        .attribute("fill", ["none", "stripe", "solid", "polkadot"])
        .attribute("number", ["one", "two", "three", "four"])
        .build()
        .expect("preset schema is well-formed")
}

/// Five variations per attribute; hands of five.
#[must_use]
pub fn five_variation() -> AttributeSchema {
    AttributeSchema::builder()
        .attribute("colors", ["red", "blue", "yellow", "green", "purple"])
        .attribute("shape", ["circle", "square", "diamond", "oval", "zig"])
        .attribute("fill", ["none", "stripe", "solid", "polkadot", "zag"])
        .attribute("number", ["one", "two", "three", "four", "five"])
        .build()
        .expect("preset schema is well-formed")
}

/// Build a schema of the requested depth with integer variations.
///
/// Produces `depth` anonymous attributes plus the required `number`
/// attribute, each listing variations `0..depth`.
///
/// # Panics
///
/// Panics if `depth` is zero.
#[must_use]
pub fn generated_schema(depth: usize) -> AttributeSchema {
    assert!(depth > 0, "schema depth must be at least 1");

    let mut builder = AttributeSchema::builder();
    for name in 0..depth {
        builder = builder.attribute(format!("attr-{name}"), 0..depth);
    }
    builder = builder.attribute(NUMBER_ATTRIBUTE, 0..depth);

    builder.build().expect("generated schema is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_depths() {
        assert_eq!(three_variation().depth(), 3);
        assert_eq!(four_variation().depth(), 4);
        assert_eq!(five_variation().depth(), 5);
    }

    #[test]
    fn test_presets_share_attribute_names() {
        for schema in [three_variation(), four_variation(), five_variation()] {
            assert_eq!(schema.attribute_count(), 4);
            for key in ["colors", "shape", "fill", "number"] {
                assert!(schema.contains(&key.into()));
            }
        }
    }

    #[test]
    fn test_generated_schema() {
        for depth in [1, 2, 5, 10] {
            let schema = generated_schema(depth);
            assert_eq!(schema.depth(), depth);
            // depth anonymous attributes plus `number`
            assert_eq!(schema.attribute_count(), depth + 1);
        }
    }

    #[test]
    #[should_panic(expected = "schema depth must be at least 1")]
    fn test_generated_schema_zero_depth() {
        generated_schema(0);
    }
}
