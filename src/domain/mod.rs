// Domain layer: request/response envelopes and the computed result. serde only.

pub mod model;
