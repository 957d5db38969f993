mod config;
mod engine;
mod geometry;
mod json_contract;
mod layout_engine;
mod validation;

pub use config::{
    AreaStyle, BarStyle, CategoryAxisConfig, ChartConfig, LineStyle, PieLabelStyle, PieStyle,
    PointMarkerStyle, SECONDARY_Y_AXIS, SeriesConfig, SeriesKind, ValueAxisConfig,
};
pub use engine::ChartEngine;
pub use geometry::{
    CartesianGeometry, CategoryTick, ChartGeometry, PieGeometry, SeriesGeometry, SeriesMarks,
    ValueTick, format_tick_label,
};
pub use json_contract::{
    CHART_CONFIG_JSON_SCHEMA_V1, CHART_GEOMETRY_JSON_SCHEMA_V1, ChartConfigJsonContractV1,
    ChartGeometryJsonContractV1,
};
pub use layout_engine::{Y_DOMAIN_HEADROOM, compute_layout, resolve_value_domain};
