// --- 依存モジュール ---

use crate::domain::raster::raster_image::RasterImage;
use crate::domain::raster::rasterizer::RasterError;

// image クレートの ico コーデックで、複数サイズの画像を1つのICOファイルにまとめます。
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 出力するICOのファイル名。
pub const ICON_FILE_NAME: &str = "favicon.ico";

/// ICOファイルの組み立て・保存時に発生する可能性のあるエラー。
///
/// ワークフローではこのエラーを捕捉して表示するだけで、処理全体は中断しません。
#[derive(Debug, Error)]
pub enum IconAssemblyError {
    /// 画像が1枚も渡されなかった場合。
    #[error("ICOに格納する画像がありません")]
    Empty,
    /// ICO用の画像の描画に失敗した場合。
    #[error("ICO用の画像を描画できませんでした: {0}")]
    Raster(#[from] RasterError),
    /// ラスタ画像のデコードに失敗した場合 (PNGが壊れているなど)。
    #[error("画像 No.{} ({size}x{size}) の読み込みに失敗しました: {source}", .index + 1)]
    Decode {
        index: usize,
        size: u32,
        #[source]
        source: ImageError,
    },
    /// ICOフレームの作成、あるいはICO全体のエンコードに失敗した場合。
    #[error("ICOのエンコードに失敗しました: {0}")]
    Encode(#[source] ImageError),
    /// 生成したICOをディスクに保存できなかった場合。
    #[error("ICOファイルの保存に失敗しました: {0}")]
    Save(#[source] std::io::Error),
}

/// メモリ上に生成されたICOファイルとそのサイズ表。
pub struct IconFile {
    /// 格納した各画像の (幅, 高さ)。格納順と一致します。
    sizes: Vec<(u32, u32)>,
    /// ICOファイルのバイナリデータ。
    ico_data: Vec<u8>,
}

impl IconFile {
    /// ラスタ画像の並びから、メモリ上にICOファイルを生成します。
    ///
    /// 各画像は一度デコードしてからRGBAに変換し、PNG形式のフレームとして
    /// 渡された順番のまま格納します。先頭の画像がICOの最初のエントリになります。
    ///
    /// # 戻り値
    /// - `Ok(Self)`: すべての画像を格納できた場合。
    /// - `Err(IconAssemblyError)`: デコードやエンコードに失敗した場合。
    pub fn create_file(rasters: &[RasterImage]) -> Result<Self, IconAssemblyError> {
        if rasters.is_empty() {
            return Err(IconAssemblyError::Empty);
        }

        // STEP 1: すべてのラスタ画像をデコードする
        // 1枚でも失敗した場合は、何番目の画像かを含めたエラーを返します。
        let mut images: Vec<DynamicImage> = Vec::with_capacity(rasters.len());
        for (index, raster) in rasters.iter().enumerate() {
            let img = image::load_from_memory(raster.png_data()).map_err(|source| {
                IconAssemblyError::Decode {
                    index,
                    size: raster.size(),
                    source,
                }
            })?;
            images.push(img);
        }

        // STEP 2: サイズ表を作る
        let sizes: Vec<(u32, u32)> = images.iter().map(|img| img.dimensions()).collect();

        // STEP 3: ICOフレームに変換する
        let frames = images
            .iter()
            .map(|img| {
                let rgba = img.to_rgba8();
                let (w, h) = rgba.dimensions();
                IcoFrame::as_png(rgba.as_raw(), w, h, ExtendedColorType::Rgba8)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(IconAssemblyError::Encode)?;

        // STEP 4: ICO全体をメモリ上のバイト列としてエンコードする
        let mut ico_data: Vec<u8> = Vec::new();
        IcoEncoder::new(&mut ico_data)
            .encode_images(&frames)
            .map_err(IconAssemblyError::Encode)?;

        log::debug!(
            "ICOを組み立てました ({} フレーム, {} bytes)",
            frames.len(),
            ico_data.len()
        );

        Ok(Self { sizes, ico_data })
    }

    pub fn sizes(&self) -> &[(u32, u32)] {
        &self.sizes
    }

    /// 先頭エントリの (幅, 高さ)。
    pub fn primary_size(&self) -> (u32, u32) {
        // create_file が空の入力を拒否するため、必ず1つ以上ある
        self.sizes[0]
    }

    #[cfg(test)]
    pub(crate) fn ico_data(&self) -> &[u8] {
        &self.ico_data
    }

    /// ICOのバイト列を指定されたパスに保存します。既存のファイルは上書きされます。
    pub fn save_to_path(&self, path: &Path) -> Result<(), IconAssemblyError> {
        fs::write(path, &self.ico_data).map_err(IconAssemblyError::Save)
    }
}

// --- テストモジュール ---
