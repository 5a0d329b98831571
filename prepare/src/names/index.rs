use std::collections::HashMap;

use unicode_database::NameIndex;

/// простая реализация индекса названий: хеш в обе стороны
///
/// занимает место настоящего сжатого индекса (бор / минимальный DFA);
/// интерфейс тот же, подмена реализации не затрагивает остальной конвейер
pub struct PlainNameIndex
{
    by_name: HashMap<String, u32>,
    by_code: HashMap<u32, String>,
}

/// построить индекс названий по подготовленному набору
pub fn build_name_index(entries: &[(String, u32)]) -> PlainNameIndex
{
    let mut by_name = HashMap::with_capacity(entries.len());
    let mut by_code = HashMap::with_capacity(entries.len());

    for (name, code) in entries.iter() {
        by_name.insert(name.clone(), *code);
        by_code.insert(*code, name.clone());
    }

    PlainNameIndex { by_name, by_code }
}

impl NameIndex for PlainNameIndex
{
    fn lookup_by_name(&self, name: &str) -> Option<u32>
    {
        self.by_name.get(name).copied()
    }

    fn lookup_by_codepoint(&self, code: u32) -> Option<&str>
    {
        self.by_code.get(&code).map(String::as_str)
    }
}
