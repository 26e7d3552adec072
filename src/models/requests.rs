use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest client request accepted, in characters
pub const MAX_TEXT_LENGTH: u64 = 10_000;

/// Request to analyze a client's free-text intent
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AnalyzeIntentRequest {
    #[validate(length(max = MAX_TEXT_LENGTH, code = "text_too_long"))]
    #[serde(default)]
    pub text: Option<String>,
}

/// Raw analyze-intent body
///
/// A JSON object is read as an [`AnalyzeIntentRequest`]. Any other JSON value
/// (`null`, arrays, strings, numbers, booleans) carries no `text` field and
/// yields an empty request.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeIntentPayload(pub AnalyzeIntentRequest);

impl AnalyzeIntentPayload {
    pub fn into_request(self) -> AnalyzeIntentRequest {
        self.0
    }
}

impl<'de> Deserialize<'de> for AnalyzeIntentPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = AnalyzeIntentPayload;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        AnalyzeIntentRequest::deserialize(de::value::MapAccessDeserializer::new(map))
            .map(AnalyzeIntentPayload)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(AnalyzeIntentPayload::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(AnalyzeIntentPayload::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(AnalyzeIntentPayload::default())
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(AnalyzeIntentPayload::default())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(AnalyzeIntentPayload::default())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(AnalyzeIntentPayload::default())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(AnalyzeIntentPayload::default())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(AnalyzeIntentPayload::default())
    }
}
