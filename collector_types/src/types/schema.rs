use std::collections::{BTreeMap, HashMap};

/// Resolves wire field ids to field names, for one record layout.
pub trait FieldSchema {
    fn field_name(&self, field_id: u16) -> Option<&str>;
}

/// A schema held in constant data.
#[derive(Clone, Copy, Debug)]
pub struct StaticSchema(pub &'static [(u16, &'static str)]);

impl FieldSchema for StaticSchema {
    fn field_name(&self, field_id: u16) -> Option<&str> {
        self.0.field_name(field_id)
    }
}

impl StaticSchema {
    pub fn field_id(&self, field_name: &str) -> Option<u16> {
        self.0
            .iter()
            .find_map(|(id, name)| (*name == field_name).then_some(*id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &'static str)> {
        self.0.iter().copied()
    }
}

/// The collector payload layout (`iglu:com.snowplowanalytics.snowplow/CollectorPayload/thrift/1-0-0`).
pub const COLLECTOR_PAYLOAD_SCHEMA: StaticSchema = StaticSchema(&[
    (31337, "schema"),
    (100, "ipAddress"),
    (200, "timestamp"),
    (210, "encoding"),
    (220, "collector"),
    (300, "userAgent"),
    (310, "refererUri"),
    (320, "path"),
    (330, "querystring"),
    (340, "body"),
    (350, "headers"),
    (360, "contentType"),
    (400, "hostname"),
    (410, "networkUserId"),
]);

impl<N: AsRef<str>> FieldSchema for [(u16, N)] {
    fn field_name(&self, field_id: u16) -> Option<&str> {
        self.iter()
            .find_map(|(id, name)| (*id == field_id).then(|| name.as_ref()))
    }
}

impl<N: AsRef<str>, const LEN: usize> FieldSchema for [(u16, N); LEN] {
    fn field_name(&self, field_id: u16) -> Option<&str> {
        self[..].field_name(field_id)
    }
}

impl<N: AsRef<str>> FieldSchema for HashMap<u16, N> {
    fn field_name(&self, field_id: u16) -> Option<&str> {
        self.get(&field_id).map(AsRef::as_ref)
    }
}

impl<N: AsRef<str>> FieldSchema for BTreeMap<u16, N> {
    fn field_name(&self, field_id: u16) -> Option<&str> {
        self.get(&field_id).map(AsRef::as_ref)
    }
}
