//! JSON form of axistags.
//!
//! ```text
//! { "axes": [
//!     { "key": "x", "typeFlags": 2, "resolution": 1.0, "description": "" },
//!     ...
//! ] }
//! ```
//!
//! Axis order in the list is axis order in the sequence. Other fields are
//! ignored on input and never written.

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{AxisInfo, AxisTags, AxisTagsError, AxisType, Result};

#[derive(Serialize, Deserialize)]
struct AxisRecord {
    key: String,
    #[serde(rename = "typeFlags")]
    type_flags: u32,
    resolution: f64,
    description: String,
}

impl From<&AxisInfo> for AxisRecord {
    fn from(info: &AxisInfo) -> Self {
        Self {
            key: info.key().to_string(),
            type_flags: info.type_flags().bits(),
            resolution: info.resolution(),
            description: info.description().to_string(),
        }
    }
}

impl TryFrom<AxisRecord> for AxisInfo {
    type Error = AxisTagsError;

    fn try_from(record: AxisRecord) -> Result<Self> {
        let flags = AxisType::from_bits(record.type_flags).ok_or_else(|| {
            AxisTagsError::MalformedInput(format!(
                "typeFlags {} of axis '{}' has bits outside {}",
                record.type_flags,
                record.key,
                AxisType::ALL_AXES.bits()
            ))
        })?;
        Ok(AxisInfo::new(
            record.key,
            flags,
            record.resolution,
            record.description,
        ))
    }
}

impl Serialize for AxisInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        AxisRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AxisInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = AxisRecord::deserialize(deserializer)?;
        AxisInfo::try_from(record).map_err(D::Error::custom)
    }
}

struct AxesSeq<'a>(&'a AxisTags);

impl Serialize for AxesSeq<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl Serialize for AxisTags {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut doc = serializer.serialize_struct("AxisTags", 1)?;
        doc.serialize_field("axes", &AxesSeq(self))?;
        doc.end()
    }
}

#[derive(Deserialize)]
struct AxesDocument {
    axes: Vec<AxisInfo>,
}

impl<'de> Deserialize<'de> for AxisTags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let doc = AxesDocument::deserialize(deserializer)?;
        AxisTags::from_axes(doc.axes).map_err(D::Error::custom)
    }
}

impl AxisTags {
    /// Pretty-printed JSON text.
    ///
    /// Non-finite resolutions are written as `null`, which [`AxisTags::from_json`]
    /// rejects.
    pub fn to_json(&self) -> String {
        // string keys only, and serde_json writes non-finite floats as null
        serde_json::to_string_pretty(self).expect("axistags always serialize to JSON")
    }

    /// Parse the text produced by [`AxisTags::to_json`].
    pub fn from_json(text: &str) -> Result<AxisTags> {
        let tags: AxisTags = serde_json::from_str(text)
            .map_err(|err| AxisTagsError::MalformedInput(err.to_string()))?;
        tracing::trace!(axes = tags.len(), "decoded axistags");
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> AxisTags {
        AxisTags::from_axes([
            AxisInfo::x().with_resolution(0.1),
            AxisInfo::fy().with_resolution(1.0 / 3.0),
            AxisInfo::new("c", AxisType::CHANNELS, 0.0, "RGB \"quoted\" \u{e9}"),
            AxisInfo::default(),
        ])
        .unwrap()
    }

    #[test]
    fn test_round_trip() {
        let tags = sample();
        let restored = AxisTags::from_json(&tags.to_json()).unwrap();
        assert_eq!(restored, tags);
    }

    #[test]
    fn test_round_trip_empty() {
        let tags = AxisTags::new();
        assert_eq!(AxisTags::from_json(&tags.to_json()).unwrap(), tags);
    }

    #[test]
    fn test_schema_fields() {
        let value: Value = serde_json::from_str(&sample().to_json()).unwrap();
        let axes = value["axes"].as_array().unwrap();
        assert_eq!(axes.len(), 4);
        assert_eq!(axes[1]["key"], "y");
        assert_eq!(axes[1]["typeFlags"], 18);
        assert_eq!(axes[0]["resolution"], 0.1);
        assert_eq!(axes[3]["description"], "");
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let text = r#"{ "version": 2, "axes": [
            { "key": "t", "typeFlags": 8, "resolution": 2, "description": "frames", "unit": "s" }
        ] }"#;
        let tags = AxisTags::from_json(text).unwrap();
        assert_eq!(
            tags.get(0).unwrap(),
            &AxisInfo::t().with_resolution(2.0).with_description("frames")
        );
    }

    #[test]
    fn test_from_json_missing_field() {
        let text = r#"{ "axes": [ { "key": "x", "typeFlags": 2, "description": "" } ] }"#;
        assert!(matches!(
            AxisTags::from_json(text),
            Err(AxisTagsError::MalformedInput(_))
        ));
        assert!(matches!(
            AxisTags::from_json(r#"{ "axis": [] }"#),
            Err(AxisTagsError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_from_json_wrong_types() {
        let cases = [
            r#"{ "axes": [ { "key": 1, "typeFlags": 2, "resolution": 0, "description": "" } ] }"#,
            r#"{ "axes": [ { "key": "x", "typeFlags": "2", "resolution": 0, "description": "" } ] }"#,
            r#"{ "axes": [ { "key": "x", "typeFlags": -2, "resolution": 0, "description": "" } ] }"#,
            r#"{ "axes": [ { "key": "x", "typeFlags": 2, "resolution": null, "description": "" } ] }"#,
            r#"{ "axes": {} }"#,
            "not json",
        ];
        for text in cases {
            assert!(
                matches!(AxisTags::from_json(text), Err(AxisTagsError::MalformedInput(_))),
                "accepted {text}"
            );
        }
    }

    #[test]
    fn test_from_json_rejects_unknown_bits() {
        let text = r#"{ "axes": [ { "key": "x", "typeFlags": 64, "resolution": 0, "description": "" } ] }"#;
        assert!(matches!(
            AxisTags::from_json(text),
            Err(AxisTagsError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_two_channel_axes() {
        let text = r#"{ "axes": [
            { "key": "c", "typeFlags": 1, "resolution": 0, "description": "" },
            { "key": "d", "typeFlags": 1, "resolution": 0, "description": "" }
        ] }"#;
        assert!(matches!(
            AxisTags::from_json(text),
            Err(AxisTagsError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_non_finite_resolution_is_not_decodable() {
        let tags = AxisTags::from_axes([AxisInfo::x().with_resolution(f64::NAN)]).unwrap();
        let text = tags.to_json();
        assert!(text.contains("null"));
        assert!(AxisTags::from_json(&text).is_err());
    }

    #[test]
    fn test_to_json_matches_serde_value() {
        let tags = sample();
        let from_text: Value = serde_json::from_str(&tags.to_json()).unwrap();
        assert_eq!(from_text, serde_json::to_value(&tags).unwrap());
        assert_eq!(from_text["axes"][1]["typeFlags"], 18);
    }

    #[test]
    fn test_serde_embedding() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Volume {
            name: String,
            axistags: AxisTags,
        }
        let volume = Volume {
            name: "stack".to_string(),
            axistags: sample(),
        };
        let text = serde_json::to_string(&volume).unwrap();
        let restored: Volume = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, volume);
    }
}
