use super::source_error::SourceError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// 読み込み済みの変換元SVG。
///
/// `load` を通じてのみ生成でき、ファイルが存在し、UTF-8テキストとして
/// 読み込めたことが保証されます。一度読み込んだ内容は変更されません。
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSvg {
    path: PathBuf,
    content: String,
}

impl SourceSvg {
    /// 指定されたパスからSVGファイルを読み込みます。
    ///
    /// # 戻り値
    /// * `Ok(SourceSvg)`: 読み込みに成功した場合。
    /// * `Err(SourceError::Missing)`: ファイルが存在しない場合。
    /// * `Err(SourceError::NotAFile)`: パスがディレクトリなどファイル以外を指す場合。
    /// * `Err(SourceError::Read)`: I/Oエラー、またはUTF-8として解釈できない場合。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SourceError::Missing(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(SourceError::NotAFile(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| SourceError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// SVG内の相対参照（`<image href="...">` など）を解決するための基準ディレクトリ。
    pub fn resources_dir(&self) -> Option<PathBuf> {
        fs::canonicalize(&self.path)
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }
}

impl fmt::Display for SourceSvg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
