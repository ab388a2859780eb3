//! Interface text per locale.

use crate::locale::Locale;

/// Fixed interface strings for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub title: &'static str,
    pub loaded: &'static str,
    pub base: &'static str,
    pub compare: &'static str,
    pub skipped: &'static str,
    pub no_data: &'static str,
    pub folder_missing: &'static str,
    found: &'static str,
    synonyms: &'static str,
    view: &'static str,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Sc => Self {
                title: "Torist 多语言鸟类索引",
                loaded: "已加载版本",
                base: "基准名录",
                compare: "对比名录",
                skipped: "已跳过",
                no_data: "未检测到有效名录，请检查 original_index 文件夹",
                folder_missing: "文件夹不存在",
                found: "共找到 {count} 个匹配",
                synonyms: "同义词库: {count} 条规则",
                view: "{name}",
            },
            Locale::Tc => Self {
                title: "Torist 多語言鳥類索引",
                loaded: "已加載版本",
                base: "基準名錄",
                compare: "對比名錄",
                skipped: "已跳過",
                no_data: "未檢測到有效名錄，請檢查 original_index 文件夾",
                folder_missing: "文件夾不存在",
                found: "共找到 {count} 個匹配",
                synonyms: "同義詞庫: {count} 條規則",
                view: "{name}",
            },
            Locale::En => Self {
                title: "Torist Smart Wild Bird Index",
                loaded: "Loaded Versions",
                base: "Base Checklist",
                compare: "Compare With",
                skipped: "Skipped",
                no_data: "No valid checklists found.",
                folder_missing: "Folder missing",
                found: "Found {count} matches",
                synonyms: "Synonyms: {count} rules",
                view: "View: {name}",
            },
            Locale::Jp => Self {
                title: "Torist 多言語野鳥名錄",
                loaded: "読込済みリスト",
                base: "基準リスト",
                compare: "比較リスト",
                skipped: "スキップ",
                no_data: "データなし。フォルダを確認してください。",
                folder_missing: "フォルダが見つかりません",
                found: "{count} 件ヒット",
                synonyms: "シノニム: {count} 件",
                view: "{name} ビュー",
            },
        }
    }

    pub fn found(&self, count: usize) -> String {
        self.found.replace("{count}", &count.to_string())
    }

    pub fn synonyms(&self, count: usize) -> String {
        self.synonyms.replace("{count}", &count.to_string())
    }

    pub fn view(&self, name: &str) -> String {
        self.view.replace("{name}", name)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn counts_are_filled_in() {
        let lines: Vec<String> = Locale::ALL
            .into_iter()
            .map(|locale| {
                let messages = Messages::for_locale(locale);
                format!("{} / {} / {}", messages.found(3), messages.synonyms(12), messages.view("IOC (15.1)"))
            })
            .collect();
        assert_snapshot!(lines.join("\n"), @r"
        共找到 3 个匹配 / 同义词库: 12 条规则 / IOC (15.1)
        共找到 3 個匹配 / 同義詞庫: 12 條規則 / IOC (15.1)
        Found 3 matches / Synonyms: 12 rules / View: IOC (15.1)
        3 件ヒット / シノニム: 12 件 / IOC (15.1) ビュー
        ");
    }
}
