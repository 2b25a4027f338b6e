mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod function_controller;
mod interaction_controller;
mod json_contract;
mod render_frame_builder;
mod viewport_controller;

pub use engine::GrapherEngine;
pub use engine_config::{GrapherEngineConfig, GrapherStyle};
pub use engine_snapshot::GrapherSnapshot;
pub use json_contract::{GRAPHER_SNAPSHOT_JSON_SCHEMA_V1, GrapherSnapshotJsonContractV1};
