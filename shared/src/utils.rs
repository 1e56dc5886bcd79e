use crate::types::Panel;

pub fn panel_index(panel: &Panel) -> usize {
    match *panel {
        Panel::Login => 0,
        Panel::Register => 1,
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn sorted_names<'a, I>(names: I) -> Vec<String>
    where I: IntoIterator<Item = &'a str>
{
    let mut list = names.into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();
    list.sort();
    list.dedup();
    list
}
