//! Build-time bundled glossary.
//!
//! The last-resort tier: a fixed snapshot of the published glossary
//! shipped with the binary. Kept in sync with the remote documents by
//! hand; there is no automated consistency check.

use std::collections::HashMap;

use crate::glossary::Glossary;

/// Stem to Japanese meaning.
const DIC: &[(&str, &str)] = &[
    ("goroutine", "軽量スレッド"),
    ("channel", "チャネル"),
    ("slice", "スライス"),
    ("map", "マップ"),
    ("interface", "インタフェース"),
    ("struct", "構造体"),
    ("pointer", "ポインタ"),
    ("method", "メソッド"),
    ("receiver", "レシーバ"),
    ("package", "パッケージ"),
    ("closure", "クロージャ"),
    ("rune", "ルーン (Unicode コードポイント)"),
    ("panic", "パニック (実行時の異常終了)"),
    ("defer", "遅延実行"),
    ("embedding", "埋め込み"),
    ("variadic", "可変長引数の"),
    ("literal", "リテラル"),
    ("declaration", "宣言"),
    ("expression", "式"),
    ("statement", "文"),
    ("identifier", "識別子"),
    ("constant", "定数"),
    ("conversion", "型変換"),
    ("assertion", "アサーション"),
];

/// Surface word (lower-case) to stem.
const WORD2STEM: &[(&str, &str)] = &[
    ("goroutine", "goroutine"),
    ("goroutines", "goroutine"),
    ("channel", "channel"),
    ("channels", "channel"),
    ("slice", "slice"),
    ("slices", "slice"),
    ("sliced", "slice"),
    ("map", "map"),
    ("maps", "map"),
    ("interface", "interface"),
    ("interfaces", "interface"),
    ("struct", "struct"),
    ("structs", "struct"),
    ("pointer", "pointer"),
    ("pointers", "pointer"),
    ("method", "method"),
    ("methods", "method"),
    ("receiver", "receiver"),
    ("receivers", "receiver"),
    ("package", "package"),
    ("packages", "package"),
    ("closure", "closure"),
    ("closures", "closure"),
    ("rune", "rune"),
    ("runes", "rune"),
    ("panic", "panic"),
    ("panics", "panic"),
    ("panicking", "panic"),
    ("defer", "defer"),
    ("defers", "defer"),
    ("deferred", "defer"),
    ("embedding", "embedding"),
    ("embedded", "embedding"),
    ("variadic", "variadic"),
    ("literal", "literal"),
    ("literals", "literal"),
    ("declaration", "declaration"),
    ("declarations", "declaration"),
    ("declared", "declaration"),
    ("expression", "expression"),
    ("expressions", "expression"),
    ("statement", "statement"),
    ("statements", "statement"),
    ("identifier", "identifier"),
    ("identifiers", "identifier"),
    ("constant", "constant"),
    ("constants", "constant"),
    ("conversion", "conversion"),
    ("conversions", "conversion"),
    ("assertion", "assertion"),
    ("assertions", "assertion"),
];

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Build the bundled glossary. Cannot fail.
pub fn glossary() -> Glossary {
    Glossary::new(to_map(DIC), to_map(WORD2STEM))
}
