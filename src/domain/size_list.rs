use std::fmt;

/// 単体PNGとして書き出すサイズ（昇順）。
pub const FAVICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// ICOファイルに埋め込むサイズ（昇順）。
pub const ICON_SIZES: [u32; 3] = [16, 32, 48];

/// ICOのディレクトリエントリで表現できる最大の幅・高さ。
pub const MAX_ICON_SIZE: u32 = 256;

// --- 構造体定義 ---

/// 検証済みの正方形サイズのリスト。
///
/// `new` または `for_icon` を通じてのみ生成でき、以下が保証されます。
/// - リストが空でないこと
/// - 0 のサイズを含まないこと
/// - (`for_icon` の場合) すべて `MAX_ICON_SIZE` 以下であること
///
/// 並び順は渡された順序のまま保持します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeList {
    sizes: Vec<u32>,
}

// --- エラー定義 ---

#[derive(Debug, PartialEq, Eq)]
pub enum SizeListError {
    /// サイズが1つも指定されていない。
    Empty,
    /// 0 のサイズが含まれている。
    ZeroSize { index: usize },
    /// ICOに格納できないサイズが含まれている。
    TooLargeForIcon { index: usize, size: u32 },
}

// --- 実装ブロック ---

impl SizeList {
    pub fn new(sizes: impl Into<Vec<u32>>) -> Result<Self, SizeListError> {
        let sizes = sizes.into();
        if sizes.is_empty() {
            return Err(SizeListError::Empty);
        }
        if let Some(index) = sizes.iter().position(|&s| s == 0) {
            return Err(SizeListError::ZeroSize { index });
        }
        Ok(Self { sizes })
    }

    /// ICO用のリストを作成します。`new` の検証に加えて上限を確認します。
    pub fn for_icon(sizes: impl Into<Vec<u32>>) -> Result<Self, SizeListError> {
        let list = Self::new(sizes)?;
        if let Some((index, &size)) = list
            .sizes
            .iter()
            .enumerate()
            .find(|(_, s)| **s > MAX_ICON_SIZE)
        {
            return Err(SizeListError::TooLargeForIcon { index, size });
        }
        Ok(list)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.sizes.iter().copied()
    }
}

// --- トレイト実装 ---

impl fmt::Display for SizeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeListError::Empty => write!(f, "サイズが1つも指定されていません。"),
            SizeListError::ZeroSize { index } => {
                write!(f, "インデックス {} のサイズが 0 です。", index)
            }
            SizeListError::TooLargeForIcon { index, size } => write!(
                f,
                "インデックス {} のサイズ {} はICOの上限 {} を超えています。",
                index, size, MAX_ICON_SIZE
            ),
        }
    }
}

impl std::error::Error for SizeListError {}

// --- テストモジュール ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        // 既定値自体も検証を通ること
        let favicon: Vec<u32> = SizeList::new(FAVICON_SIZES).unwrap().iter().collect();
        let icon: Vec<u32> = SizeList::for_icon(ICON_SIZES).unwrap().iter().collect();
        assert_eq!(favicon, FAVICON_SIZES.to_vec());
        assert_eq!(icon, ICON_SIZES.to_vec());
    }

    #[test]
    fn new_empty_returns_empty_error() {
        assert_eq!(SizeList::new(Vec::new()), Err(SizeListError::Empty));
    }

    #[test]
    fn new_rejects_zero_and_reports_index() {
        assert_eq!(
            SizeList::new(vec![16, 0, 32]),
            Err(SizeListError::ZeroSize { index: 1 })
        );
    }

    #[test]
    fn for_icon_rejects_oversized_entries() {
        assert_eq!(
            SizeList::for_icon(vec![16, 512]),
            Err(SizeListError::TooLargeForIcon { index: 1, size: 512 })
        );
        // 256 ちょうどは許容される
        assert!(SizeList::for_icon(vec![256]).is_ok());
    }

    #[test]
    fn keeps_given_order() {
        let list = SizeList::new(vec![48, 16, 32]).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![48, 16, 32]);
    }
}
