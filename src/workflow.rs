//! ファビコン生成のメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! SVG → PNG各サイズ → ICO という変換の流れを実装します。

use crate::cli::Args;
use crate::domain::icon_file::{IconAssemblyError, IconFile, ICON_FILE_NAME};
use crate::domain::raster::raster_image::RasterImage;
use crate::domain::raster::rasterizer::{Rasterize, SvgRasterizer};
use crate::domain::size_list::{SizeList, FAVICON_SIZES, ICON_SIZES};
use crate::domain::source::source_svg::SourceSvg;
use crate::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};

/// ICO生成ステップの結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconOutcome {
    /// ICOを書き出せた場合。`sizes` はICOに格納したサイズ表。
    Assembled { path: PathBuf, sizes: Vec<(u32, u32)> },
    /// ICOの生成に失敗した場合。処理全体はこの状態でも完了扱いになる。
    Failed { reason: String },
}

/// 1回の実行で生成したファイルの一覧。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// 書き出したPNGのパス（サイズリストの順）。
    pub written: Vec<PathBuf>,
    pub icon: IconOutcome,
}

// --- public な関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 戻り値
/// * `Ok(GenerationReport)`: PNGの書き出しまで完了した場合。ICOの失敗はここに含まれる。
/// * `Err(AppError)`: 変換元SVGが読めない、描画や書き込みに失敗したなど、回復不可能な場合。
///   変換元SVGが読めない場合は、出力フォルダを含め何も作成しない。
pub fn run(args: &Args) -> Result<GenerationReport, AppError> {
    // 1. 変換元SVGの読み込み (存在しなければここで終了)
    let source = SourceSvg::load(&args.source)?;
    let rasterizer = SvgRasterizer::new(&source)?;

    // 2. 出力ディレクトリの準備
    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir)?;
    }

    // 3. サイズリストの検証
    let favicon_sizes = SizeList::new(FAVICON_SIZES)?;
    let icon_sizes = SizeList::for_icon(ICON_SIZES)?;

    generate(&rasterizer, &args.output_dir, &favicon_sizes, &icon_sizes)
}

/// 任意のラスタライザを使ってPNG一式とICOを生成します。
///
/// `output_dir` は存在している必要があります。
pub fn generate<R: Rasterize>(
    rasterizer: &R,
    output_dir: &Path,
    favicon_sizes: &SizeList,
    icon_sizes: &SizeList,
) -> Result<GenerationReport, AppError> {
    // 1. 単体PNGの書き出し
    // ここでの失敗は回復せず、そのまま呼び出し元へ伝播する。
    let mut written = Vec::new();
    for size in favicon_sizes.iter() {
        let raster = rasterizer.rasterize(size)?;
        let path = raster.save_to_dir(output_dir)?;
        println!("生成しました: {}", path.display());
        written.push(path);
    }

    // 2. ICOの生成
    // このステップの失敗は表示だけ行い、処理を続ける。
    let ico_path = output_dir.join(ICON_FILE_NAME);
    let icon = match assemble_icon(rasterizer, icon_sizes, &ico_path) {
        Ok(icon) => {
            log::debug!("ICOの先頭エントリ: {:?}", icon.primary_size());
            println!("生成しました: {}", ico_path.display());
            IconOutcome::Assembled {
                path: ico_path,
                sizes: icon.sizes().to_vec(),
            }
        }
        Err(e) => {
            eprintln!("[警告] ICOの生成に失敗しました: {}", e);
            IconOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    // 3. 完了報告 (ICOの成否に関わらず表示する)
    println!("ファビコンの生成が完了しました。");

    Ok(GenerationReport { written, icon })
}

// --- private なヘルパー関数 ---

/// ICO用のサイズで改めて描画し、1つのICOファイルにまとめて保存します。
/// 単体PNGの描画結果は再利用しません。
fn assemble_icon<R: Rasterize>(
    rasterizer: &R,
    icon_sizes: &SizeList,
    ico_path: &Path,
) -> Result<IconFile, IconAssemblyError> {
    let rasters = icon_sizes
        .iter()
        .map(|size| rasterizer.rasterize(size))
        .collect::<Result<Vec<RasterImage>, _>>()?;

    let icon = IconFile::create_file(&rasters)?;
    icon.save_to_path(ico_path)?;
    Ok(icon)
}

// --- テストモジュール ---
