//! Pass 2: Icon Normalizer

use crate::dom::ArenaDom;

use super::predicates::{ICON_CLASS, LEGACY_ICON_CLASS, canonical_glyph, is_icon, is_legacy_icon};

/// What the icon pass changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IconChanges {
    /// Elements moved from the legacy icon class to the canonical one.
    pub classes: usize,
    /// Glyph names rewritten to their canonical form.
    pub glyphs: usize,
}

/// Move legacy icons to the canonical family and canonicalize glyph names.
///
/// Class rewriting runs first so that freshly migrated icons get their glyph
/// names normalized in the same pass.
pub fn normalize_icons(dom: &mut ArenaDom) -> IconChanges {
    let classes = migrate_icon_classes(dom);
    let glyphs = canonicalize_glyphs(dom);
    IconChanges { classes, glyphs }
}

/// Replace `material-icons` with `material-symbols-outlined`, keeping every
/// other class in order.
fn migrate_icon_classes(dom: &mut ArenaDom) -> usize {
    let legacy: Vec<_> = dom
        .descendants(dom.document())
        .filter(|&id| is_legacy_icon(dom, id))
        .collect();

    for &id in &legacy {
        let mut classes: Vec<String> = dom
            .element_classes(id)
            .iter()
            .filter(|c| *c != LEGACY_ICON_CLASS)
            .cloned()
            .collect();
        if !classes.iter().any(|c| c == ICON_CLASS) {
            classes.push(ICON_CLASS.to_string());
        }
        dom.set_classes(id, &classes);
    }

    legacy.len()
}

/// Rewrite alias glyph names on canonical icons. Icons whose content is not
/// a single text node are skipped.
fn canonicalize_glyphs(dom: &mut ArenaDom) -> usize {
    let rewrites: Vec<_> = dom
        .descendants(dom.document())
        .filter(|&id| is_icon(dom, id))
        .filter_map(|id| {
            let glyph = dom.single_text_child(id)?;
            let canonical = canonical_glyph(glyph)?;
            (glyph != canonical).then_some((id, canonical))
        })
        .collect();

    for &(id, canonical) in &rewrites {
        dom.set_text(id, canonical);
    }

    rewrites.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn spans(dom: &ArenaDom) -> Vec<(String, String)> {
        dom.find_all_by_tag("span")
            .into_iter()
            .map(|id| {
                (
                    dom.get_attr(id, "class").unwrap_or_default().to_string(),
                    dom.collect_text(id, ""),
                )
            })
            .collect()
    }

    #[test]
    fn test_legacy_class_is_replaced_in_place() {
        let mut dom = parse_html(r#"<span class="text-lg material-icons md-24">home</span>"#);
        let changes = normalize_icons(&mut dom);

        assert_eq!(changes, IconChanges { classes: 1, glyphs: 0 });
        assert_eq!(
            spans(&dom),
            [(
                "text-lg md-24 material-symbols-outlined".to_string(),
                "home".to_string()
            )]
        );
    }

    #[test]
    fn test_class_not_duplicated() {
        let mut dom = parse_html(
            r#"<span class="material-icons material-symbols-outlined">home</span>"#,
        );
        normalize_icons(&mut dom);
        assert_eq!(spans(&dom)[0].0, "material-symbols-outlined");
    }

    #[test]
    fn test_back_and_message_glyphs() {
        let mut dom = parse_html(
            r#"<span class="material-symbols-outlined">chevron_left</span>
               <span class="material-icons"> Arrow_Back_iOS_New </span>
               <span class="material-symbols-rounded">mail</span>
               <span class="material-symbols-outlined">arrow_back</span>
               <span class="material-symbols-outlined">search</span>"#,
        );
        let changes = normalize_icons(&mut dom);

        let glyphs: Vec<_> = spans(&dom).into_iter().map(|(_, g)| g).collect();
        assert_eq!(glyphs, ["arrow_back", "arrow_back", "chat", "arrow_back", "search"]);
        assert_eq!(changes.glyphs, 3);
    }

    #[test]
    fn test_non_icons_and_nested_content_are_untouched() {
        let mut dom = parse_html(
            r#"<span class="label">chevron_left</span>
               <span class="material-symbols-outlined"><b>mail</b></span>"#,
        );
        let changes = normalize_icons(&mut dom);

        assert_eq!(changes, IconChanges::default());
        let texts: Vec<_> = spans(&dom).into_iter().map(|(_, t)| t).collect();
        assert_eq!(texts, ["chevron_left", "mail"]);
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let mut dom = parse_html(
            r#"<i class="material-icons">chatbubble</i><span class="material-icons">keyboard_backspace</span>"#,
        );
        normalize_icons(&mut dom);
        assert_eq!(normalize_icons(&mut dom), IconChanges::default());
    }
}
