//! Message types for `proto/entity.proto`, in the form `prost-build` emits.
//!
//! Kept in-tree so building the crate does not need `protoc`. Regenerate if
//! the schema changes; `tests::test_message_tags_match_schema` fails when the
//! two drift apart.

use crate::record::Record;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Entity {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub details: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub tags: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

impl From<&Record> for Entity {
    fn from(record: &Record) -> Self {
        Entity {
            name: record.name.clone(),
            details: record.details.clone(),
            tags: record.tags.clone(),
        }
    }
}

impl From<Entity> for Record {
    fn from(entity: Entity) -> Self {
        Record {
            name: entity.name,
            details: entity.details,
            tags: entity.tags,
        }
    }
}
