use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 1つのサイズにラスタライズされた正方形のPNG画像。
///
/// `size` は幅と高さの両方を表します。`png_data` は `SvgRasterizer` が
/// エンコードしたPNGのバイト列ですが、この型自体は中身を検証しません。
/// 検証はICOの組み立て時（デコード時）に行われます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    size: u32,
    png_data: Vec<u8>,
}

impl RasterImage {
    pub fn new(size: u32, png_data: Vec<u8>) -> Self {
        Self { size, png_data }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn png_data(&self) -> &[u8] {
        &self.png_data
    }

    /// 出力ファイル名 (例: `favicon-32x32.png`)。
    pub fn file_name(&self) -> String {
        format!("favicon-{0}x{0}.png", self.size)
    }

    /// `dir` 配下に `file_name()` の名前で保存し、書き込んだパスを返します。
    /// 既存のファイルは常に上書きされます。
    pub fn save_to_dir(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, &self.png_data)?;
        Ok(path)
    }
}
