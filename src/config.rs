use crate::OcrArgs;
use ocr_prep::output::OutputFormat;
use ocr_prep::OcrOptions;
use std::path::{Path, PathBuf};

/// Batch configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    pub quality: u8,
    pub options: OcrOptions,
}

impl Config {
    /// `<out_dir>/<input stem>.<format extension>`
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        self.out_dir
            .join(format!("{}.{}", stem, self.format.extension()))
    }
}

impl From<OcrArgs> for Config {
    fn from(args: OcrArgs) -> Self {
        Self {
            inputs: args.inputs,
            out_dir: args.out_dir,
            format: args.format,
            quality: args.quality,
            options: OcrOptions {
                tilt_degrees: args.tilt,
                contrast_factor: args.contrast,
                threshold: args.threshold,
                binarize: !args.no_binarize,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(format: OutputFormat) -> Config {
        Config {
            inputs: vec![],
            out_dir: PathBuf::from("out"),
            format,
            quality: 90,
            options: OcrOptions::default(),
        }
    }

    #[test]
    fn test_output_path_swaps_extension() {
        let config = config(OutputFormat::Jpeg);
        assert_eq!(
            config.output_path(Path::new("scans/page-1.webp")),
            PathBuf::from("out/page-1.jpg")
        );
    }

    #[test]
    fn test_output_path_without_stem() {
        let config = config(OutputFormat::Png);
        assert_eq!(config.output_path(Path::new("/")), PathBuf::from("out/image.png"));
    }

    #[test]
    fn test_from_args_maps_binarize_flag() {
        let args = OcrArgs {
            inputs: vec![PathBuf::from("a.png")],
            out_dir: PathBuf::from("prepared"),
            format: OutputFormat::Png,
            quality: 80,
            tilt: -2.0,
            contrast: 1.0,
            threshold: 100,
            no_binarize: true,
        };
        let config = Config::from(args);
        assert!(!config.options.binarize);
        assert_eq!(config.options.tilt_degrees, -2.0);
        assert_eq!(config.options.threshold, 100);
        assert_eq!(config.quality, 80);
    }
}
