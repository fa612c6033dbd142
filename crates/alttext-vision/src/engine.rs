use std::path::{Path, PathBuf};
use std::process::Command;

use alttext_config::engine::EngineConfig;
use alttext_core::{EngineError, RecognitionEngine};

pub const NO_CAPTION: &str = "Could not generate a caption for the image.";

/// Runs an external captioning program once per image.
///
/// The program is invoked as `program [args..] <encoder> <decoder> <vocab> <image>`
/// and must print the raw caption on stdout.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: PathBuf,
    args: Vec<String>,
    encoder: PathBuf,
    decoder: PathBuf,
    vocab: PathBuf,
}

impl CommandEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            encoder: config.encoder_path(),
            decoder: config.decoder_path(),
            vocab: config.vocab_path(),
        }
    }

    /// Every required file that is missing, image included
    fn missing_files(&self, image_path: &Path) -> Vec<PathBuf> {
        [
            image_path,
            self.encoder.as_path(),
            self.decoder.as_path(),
            self.vocab.as_path(),
        ]
        .into_iter()
        .filter(|path| !path.exists())
        .map(Path::to_path_buf)
        .collect()
    }
}

impl RecognitionEngine for CommandEngine {
    fn describe(&self, image_path: &Path) -> Result<String, EngineError> {
        let missing = self.missing_files(image_path);
        if !missing.is_empty() {
            return Err(EngineError::MissingFiles(missing));
        }

        tracing::debug!("Running {} on {}", self.program.display(), image_path.display());
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.encoder)
            .arg(&self.decoder)
            .arg(&self.vocab)
            .arg(image_path)
            .output()
            .map_err(EngineError::Launch)?;

        if !output.status.success() {
            return Err(EngineError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let raw = String::from_utf8(output.stdout)?;
        Ok(clean_caption(&raw))
    }
}

/// Strip model control tokens and stray periods, end with a single period
pub fn clean_caption(raw: &str) -> String {
    let words: Vec<&str> = raw
        .split_whitespace()
        .filter(|word| !word.contains('<') && *word != ".")
        .collect();

    if words.is_empty() {
        return NO_CAPTION.to_string();
    }
    format!("{}.", words.join(" "))
}
