//! Downloader command line construction.

use intake_core::FileDownload;

/// Program used when none is configured.
pub const DEFAULT_DOWNLOADER: &str = "wget";

/// How to invoke the external download utility.
///
/// The final argument list is `base_args`, the verbose flag, the output flag
/// followed by the target filename, and the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloaderCommand {
    /// Program to execute (looked up on `PATH` when not a path).
    pub program: String,
    /// Arguments placed before the per-file arguments.
    pub base_args: Vec<String>,
    /// Flag enabling verbose output.
    pub verbose_flag: String,
    /// Flag that takes the output filename.
    pub output_flag: String,
}

impl Default for DownloaderCommand {
    fn default() -> Self {
        Self::new(DEFAULT_DOWNLOADER)
    }
}

impl DownloaderCommand {
    /// Use `program` with wget-compatible flags.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            base_args: Vec::new(),
            verbose_flag: "-v".to_string(),
            output_flag: "-O".to_string(),
        }
    }

    /// Parse a whitespace-separated command such as `busybox wget`.
    ///
    /// Returns the default command when `line` is blank.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace().map(str::to_string);
        let Some(program) = parts.next() else {
            return Self::default();
        };
        Self::new(program).with_base_args(parts.collect())
    }

    /// Set the arguments placed before the per-file arguments.
    #[must_use]
    pub fn with_base_args(mut self, args: Vec<String>) -> Self {
        self.base_args = args;
        self
    }

    /// Arguments for downloading one file.
    pub fn args_for(&self, request: &FileDownload) -> Vec<String> {
        let mut args = self.base_args.clone();
        args.extend([
            self.verbose_flag.clone(),
            self.output_flag.clone(),
            request.file_name.clone(),
            request.url.clone(),
        ]);
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_wget() {
        let command = DownloaderCommand::default();
        assert_eq!(command.program, "wget");
        assert!(command.base_args.is_empty());
    }

    #[test]
    fn test_args_for_request() {
        let request = FileDownload::new("https://s3.example.com/a?sig=1", "042", "/data");
        let args = DownloaderCommand::default().args_for(&request);
        assert_eq!(args, vec!["-v", "-O", "042", "https://s3.example.com/a?sig=1"]);
    }

    #[test]
    fn test_base_args_come_first() {
        let request = FileDownload::new("https://x/y", "out", "/data");
        let args = DownloaderCommand::parse("busybox wget").args_for(&request);
        assert_eq!(args, vec!["wget", "-v", "-O", "out", "https://x/y"]);
    }

    #[test]
    fn test_parse_blank_falls_back_to_default() {
        assert_eq!(DownloaderCommand::parse("   "), DownloaderCommand::default());
        assert_eq!(DownloaderCommand::parse("/usr/local/bin/wget").program, "/usr/local/bin/wget");
    }
}
