//! Fixed UI strings with per-language tables and caller overrides.
//!
//! Lookup order: caller override, then the requested language's table, then
//! the fallback language. Languages are addressed by lowercase ISO 639-1
//! codes.

/// The language used when a requested language has no registered table.
pub const FALLBACK_LANGUAGE: &str = "en";

/// A translatable fixed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    /// Trigger text when nothing is selected.
    Placeholder,
    /// Search input hint text.
    SearchPlaceholder,
    /// Empty-state message when a search matches nothing.
    NothingToShow,
    /// Multi-select trigger summary. Contains a `{count}` placeholder.
    SelectedItemsCount,
}

struct Translation {
    placeholder: &'static str,
    search_placeholder: &'static str,
    nothing_to_show: &'static str,
    selected_items_count: &'static str,
}

impl Translation {
    fn get(&self, key: TranslationKey) -> &'static str {
        match key {
            TranslationKey::Placeholder => self.placeholder,
            TranslationKey::SearchPlaceholder => self.search_placeholder,
            TranslationKey::NothingToShow => self.nothing_to_show,
            TranslationKey::SelectedItemsCount => self.selected_items_count,
        }
    }
}

static EN: Translation = Translation {
    placeholder: "Select an item",
    search_placeholder: "Search...",
    nothing_to_show: "Nothing to show!",
    selected_items_count: "{count} items have been selected",
};

static ES: Translation = Translation {
    placeholder: "Elige un elemento",
    search_placeholder: "Buscar...",
    nothing_to_show: "¡No hay nada que mostrar!",
    selected_items_count: "Se han seleccionado {count} elementos",
};

static FR: Translation = Translation {
    placeholder: "Sélectionnez un élément",
    search_placeholder: "Recherche...",
    nothing_to_show: "Rien à montrer !",
    selected_items_count: "{count} éléments ont été sélectionnés",
};

static DE: Translation = Translation {
    placeholder: "Wählen Sie ein Element aus",
    search_placeholder: "Suchen...",
    nothing_to_show: "Nichts anzuzeigen!",
    selected_items_count: "{count} Elemente wurden ausgewählt",
};

static TR: Translation = Translation {
    placeholder: "Bir öğe seçin",
    search_placeholder: "Ara...",
    nothing_to_show: "Gösterilecek bir şey yok!",
    selected_items_count: "{count} öğe seçildi",
};

static RU: Translation = Translation {
    placeholder: "Выберите элемент",
    search_placeholder: "Поиск...",
    nothing_to_show: "Нечего показывать!",
    selected_items_count: "Выбрано элементов: {count}",
};

fn table_for(language: &str) -> Option<&'static Translation> {
    match language {
        "en" => Some(&EN),
        "es" => Some(&ES),
        "fr" => Some(&FR),
        "de" => Some(&DE),
        "tr" => Some(&TR),
        "ru" => Some(&RU),
        _ => None,
    }
}

/// Per-instance string overrides that beat every language table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationOverrides {
    placeholder: Option<String>,
    search_placeholder: Option<String>,
    nothing_to_show: Option<String>,
    selected_items_count: Option<String>,
}

impl TranslationOverrides {
    /// Override the trigger placeholder.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Override the search input hint.
    pub fn with_search_placeholder(mut self, text: impl Into<String>) -> Self {
        self.search_placeholder = Some(text.into());
        self
    }

    /// Override the empty-state message.
    pub fn with_nothing_to_show(mut self, text: impl Into<String>) -> Self {
        self.nothing_to_show = Some(text.into());
        self
    }

    /// Override the multi-select count template. May contain `{count}`.
    pub fn with_selected_items_count(mut self, text: impl Into<String>) -> Self {
        self.selected_items_count = Some(text.into());
        self
    }

    fn get(&self, key: TranslationKey) -> Option<&str> {
        match key {
            TranslationKey::Placeholder => self.placeholder.as_deref(),
            TranslationKey::SearchPlaceholder => self.search_placeholder.as_deref(),
            TranslationKey::NothingToShow => self.nothing_to_show.as_deref(),
            TranslationKey::SelectedItemsCount => self.selected_items_count.as_deref(),
        }
    }
}

/// Look up the string for `key` in `language`.
///
/// Overrides win; an unregistered language falls back to
/// [`FALLBACK_LANGUAGE`].
pub fn translate<'a>(
    key: TranslationKey,
    language: &str,
    overrides: &'a TranslationOverrides,
) -> &'a str {
    if let Some(text) = overrides.get(key) {
        return text;
    }
    let table = table_for(language).unwrap_or(&EN);
    table.get(key)
}

/// Render the multi-select summary for `count` selected items.
pub fn selected_count_text(count: usize, language: &str, overrides: &TranslationOverrides) -> String {
    translate(TranslationKey::SelectedItemsCount, language, overrides)
        .replace("{count}", &count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_language() {
        let overrides = TranslationOverrides::default();
        assert_eq!(
            translate(TranslationKey::Placeholder, "fr", &overrides),
            "Sélectionnez un élément"
        );
    }

    #[test]
    fn test_unknown_language_falls_back_to_en() {
        let overrides = TranslationOverrides::default();
        assert_eq!(
            translate(TranslationKey::NothingToShow, "xx", &overrides),
            "Nothing to show!"
        );
    }

    #[test]
    fn test_override_beats_language_table() {
        let overrides = TranslationOverrides::default().with_placeholder("Pick one");
        assert_eq!(
            translate(TranslationKey::Placeholder, "de", &overrides),
            "Pick one"
        );
        // Other keys still come from the table.
        assert_eq!(
            translate(TranslationKey::SearchPlaceholder, "de", &overrides),
            "Suchen..."
        );
    }

    #[test]
    fn test_selected_count_substitution() {
        let overrides = TranslationOverrides::default();
        assert_eq!(
            selected_count_text(3, "en", &overrides),
            "3 items have been selected"
        );
    }

    #[test]
    fn test_selected_count_override_template() {
        let overrides =
            TranslationOverrides::default().with_selected_items_count("{count} picked");
        assert_eq!(selected_count_text(2, "en", &overrides), "2 picked");
    }
}
