use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_program() -> PathBuf {
    PathBuf::from("image-captioning")
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("data")
}

/// External captioning program and the model files it needs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    #[serde(default = "default_program")]
    pub program: PathBuf,
    /// Passed before the model and image paths
    pub args: Vec<String>,
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,
}

impl EngineConfig {
    pub fn new() -> Self {
        let program = env::var("ALTTEXT_ENGINE_PROGRAM")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_program());

        let model_dir = env::var("ALTTEXT_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_dir());

        Self {
            program,
            args: Vec::new(),
            model_dir,
        }
    }

    pub fn encoder_path(&self) -> PathBuf {
        self.model_dir.join("encoder.onnx")
    }

    pub fn decoder_path(&self) -> PathBuf {
        self.model_dir.join("decoder.onnx")
    }

    pub fn vocab_path(&self) -> PathBuf {
        self.model_dir.join("vocab.txt")
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
            model_dir: default_model_dir(),
        }
    }
}
