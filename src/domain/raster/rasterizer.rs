// --- 依存モジュール ---

use super::raster_image::RasterImage;
use crate::domain::source::source_svg::SourceSvg;

// resvg は usvg (SVGの解析) と tiny-skia (描画) を再エクスポートしているため、
// それぞれを個別に依存関係へ追加する必要はありません。
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use std::sync::Arc;
use thiserror::Error;

/// ラスタライズ処理で発生する可能性のあるエラー。
/// いずれも回復不可能なエラーとして呼び出し元へ伝播されます。
#[derive(Debug, Error)]
pub enum RasterError {
    /// SVGテキストの解析に失敗した場合。
    #[error("SVGの解析に失敗しました")]
    Parse(#[from] resvg::usvg::Error),
    /// 描画先のピクセルバッファを確保できなかった場合 (サイズ 0 など)。
    #[error("{0}x{0} の描画バッファを確保できませんでした")]
    Pixmap(u32),
    /// 描画結果をPNGにエンコードできなかった場合。
    #[error("{size}x{size} のPNGエンコードに失敗しました: {message}")]
    Encode { size: u32, message: String },
}

/// 正方形のラスタ画像を生成できるもの。
///
/// ワークフローはこのトレイト越しにラスタライザを呼び出すため、
/// テストでは壊れたPNGを返す実装に差し替えることができます。
pub trait Rasterize {
    fn rasterize(&self, size: u32) -> Result<RasterImage, RasterError>;
}

/// resvg を使ってSVGを描画するラスタライザ。
///
/// SVGの解析は `new` で一度だけ行い、以降は `rasterize` のたびに
/// 新しいピクセルバッファへ描画します。結果のキャッシュは行いません。
pub struct SvgRasterizer {
    tree: Tree,
}

impl SvgRasterizer {
    /// SVGを解析してラスタライザを作成します。
    ///
    /// `<text>` 要素を描画できるよう、システムフォントを読み込みます。
    /// 相対パスで参照された画像は、SVGファイルのあるディレクトリを基準に解決されます。
    pub fn new(source: &SourceSvg) -> Result<Self, RasterError> {
        let mut opt = Options::default();
        opt.resources_dir = source.resources_dir();
        Arc::make_mut(&mut opt.fontdb).load_system_fonts();

        let tree = Tree::from_str(source.content(), &opt)?;
        let size = tree.size();
        log::debug!(
            "{} を解析しました (固有サイズ {} x {})",
            source,
            size.width(),
            size.height()
        );
        Ok(Self { tree })
    }
}

impl Rasterize for SvgRasterizer {
    /// SVGのビューポート全体を `size` x `size` に拡大・縮小して描画します。
    /// 縦横比が正方形でない場合は、縦横それぞれ独立した倍率で引き伸ばします。
    fn rasterize(&self, size: u32) -> Result<RasterImage, RasterError> {
        let mut pixmap = Pixmap::new(size, size).ok_or(RasterError::Pixmap(size))?;

        let svg_size = self.tree.size();
        let scale_x = size as f32 / svg_size.width();
        let scale_y = size as f32 / svg_size.height();
        let transform = Transform::from_scale(scale_x, scale_y);

        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        let png_data = pixmap.encode_png().map_err(|e| RasterError::Encode {
            size,
            message: e.to_string(),
        })?;
        log::trace!("{0}x{0} を描画しました ({1} bytes)", size, png_data.len());

        Ok(RasterImage::new(size, png_data))
    }
}

// --- テストモジュール ---
