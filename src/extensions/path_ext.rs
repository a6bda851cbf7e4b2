use std::path::Path;

pub trait FileName {
    fn string_file_name(&self) -> &str;
    fn lowercase_extension(&self) -> Option<String>;
}

impl FileName for Path {
    fn string_file_name(&self) -> &str {
        self.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
    }

    fn lowercase_extension(&self) -> Option<String> {
        self.extension().and_then(|e| e.to_str()).map(str::to_lowercase)
    }
}
