//! The optional packages the prober knows about.

use std::fmt;

/// An optional ML/runtime package whose presence is probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Package {
    /// Tensor runtime.
    Torch,
    /// Optimization toolkit.
    Optimum,
    /// Model-hub library.
    Transformers,
    /// Acceleration library.
    Accelerate,
    /// Diffusion-model library.
    Diffusers,
    /// Graph-execution inference engine.
    OnnxRuntime,
    /// Hardware-optimized inference engine.
    OpenVino,
    /// Compression toolkit.
    NeuralCompressor,
}

/// Distribution names the graph-execution engine ships under, in lookup
/// priority order, paired with the label prefixed to the reported version.
pub const RUNTIME_ENGINE_VARIANTS: &[(&str, &str)] = &[
    ("onnxruntime", "ort"),
    ("onnxruntime-gpu", "ort-gpu"),
    ("onnxruntime-training", "ort-training"),
];

impl Package {
    /// Every probed package, in report order.
    pub const ALL: [Package; 8] = [
        Package::Torch,
        Package::Optimum,
        Package::Transformers,
        Package::Accelerate,
        Package::Diffusers,
        Package::OnnxRuntime,
        Package::OpenVino,
        Package::NeuralCompressor,
    ];

    /// Top-level import name.
    pub fn module_name(self) -> &'static str {
        match self {
            Package::Torch => "torch",
            Package::Optimum => "optimum",
            Package::Transformers => "transformers",
            Package::Accelerate => "accelerate",
            Package::Diffusers => "diffusers",
            Package::OnnxRuntime => "onnxruntime",
            Package::OpenVino => "openvino",
            Package::NeuralCompressor => "neural_compressor",
        }
    }

    /// Distribution name used for metadata lookups.
    ///
    /// For [`Package::OnnxRuntime`] this is only the standard variant; see
    /// [`RUNTIME_ENGINE_VARIANTS`].
    pub fn distribution_name(self) -> &'static str {
        match self {
            Package::NeuralCompressor => "neural_compressor",
            other => other.module_name(),
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module_name())
    }
}
