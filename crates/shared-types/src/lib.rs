pub mod types;

pub use types::{
    AnalysisResult, Card, IndemnityClassification, Light, LightStatus, SignalReport,
};
