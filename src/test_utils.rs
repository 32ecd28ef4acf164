//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::collections::HashMap;

use crate::catalog::CatalogNode;
use crate::catalog;

/// テスト用の引数マップを作成する
///
/// # Arguments
/// * `pairs` - プレースホルダー名と値の組
pub(crate) fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(name, value)| ((*name).to_string(), (*value).to_string())).collect()
}

/// テスト用の小さなカタログを作成する（英語）
pub(crate) fn sample_en() -> CatalogNode {
    catalog! {
        "greeting" => "Hello {{name}}",
        "fine" => {
            "count" => [one: "{{count}} fine", other: "{{count}} fines"],
            "reason" => "Reason: {{reason}}",
        },
    }
}

/// テスト用の小さなカタログを作成する（ドイツ語）
///
/// `fine.count` は英語と異なり複数形ではなく単純な文字列
pub(crate) fn sample_de() -> CatalogNode {
    catalog! {
        "greeting" => "Hallo {{name}}",
        "fine" => {
            "count" => "Strafen: {{count}}",
            "reason" => "Grund: {{reason}}",
        },
    }
}
