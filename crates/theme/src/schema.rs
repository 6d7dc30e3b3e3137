//! Palette to editor theme mapping.
//!
//! Workbench colors are grouped into sections by the part of the editor
//! they paint. A key belongs to exactly one section; [`UiColors`] rejects
//! the document otherwise. `None` marks a key deliberately left to the
//! editor's default.

use unoduetre_color::{dilute, mix, Color};
use unoduetre_document::{DocumentError, ThemeDocument, UiColors};

use crate::palette::Palette;
use crate::tokens::token_rules;

pub type Slot = (&'static str, Option<Color>);

/// A named group of workbench color keys.
#[derive(Debug, Clone)]
pub struct Section {
    pub name: &'static str,
    pub slots: Vec<Slot>,
}

impl Section {
    fn new(name: &'static str, slots: Vec<Slot>) -> Self {
        Self { name, slots }
    }
}

/// Build the full theme document for `palette`.
pub fn map_palette(palette: &Palette) -> Result<ThemeDocument, DocumentError> {
    let colors = UiColors::from_entries(
        ui_sections(palette)
            .into_iter()
            .flat_map(|section| section.slots),
    )?;
    Ok(ThemeDocument {
        kind: palette.kind,
        colors,
        token_colors: token_rules(palette),
    })
}

pub fn ui_sections(p: &Palette) -> Vec<Section> {
    vec![
        Section::new("workbench", workbench(p)),
        Section::new("input", input(p)),
        Section::new("scrollbar", scrollbar(p)),
        Section::new("command center", command_center(p)),
        Section::new("lists", lists(p)),
        Section::new("status bar", status_bar(p)),
        Section::new("badge", badge(p)),
        Section::new("menu", menu(p)),
        Section::new("keybinding labels", keybinding_labels(p)),
        Section::new("activity bar", activity_bar(p)),
        Section::new("bracket highlight", bracket_highlight(p)),
        Section::new("editor surface", editor(p)),
        Section::new("editor gutter", editor_gutter(p)),
        Section::new("peek view", peek_view(p)),
        Section::new("notifications", notifications(p)),
        Section::new("drag and drop", drag_and_drop(p)),
        Section::new("buttons", buttons(p)),
        Section::new("panel", panel(p)),
        Section::new("side bar", side_bar(p)),
        Section::new("tabs", tabs(p)),
        Section::new("diff editor", diff_editor(p)),
        Section::new("merge conflicts", merge_conflicts(p)),
        Section::new("git decorations", git_decorations(p)),
        Section::new("title bar", title_bar(p)),
        Section::new("dropdown", dropdown(p)),
        Section::new("highlight borders", highlight_borders()),
        Section::new("terminal", terminal(p)),
        Section::new("text links", text_links(p)),
    ]
}

fn workbench(p: &Palette) -> Vec<Slot> {
    vec![
        ("focusBorder", Some(p.accent0)),
        ("foreground", Some(p.fg)),
        ("errorForeground", Some(p.red)),
        ("disabledForeground", Some(dilute(p.fg, 50.0))),
        ("icon.foreground", Some(p.fg)),
        ("toolbar.hoverBackground", Some(dilute(p.fg, 10.0))),
        ("toolbar.activeBackground", Some(p.shadow0)),
        ("widget.border", Some(p.widget_border)),
        ("widget.shadow", Some(p.shadow1)),
        ("progressBar.background", Some(p.fg)),
        ("pickerGroup.border", Some(p.border0)),
        ("tree.indentGuidesStroke", Some(p.border0)),
        ("debugToolBar.background", Some(p.widget_bg)),
    ]
}

fn input(p: &Palette) -> Vec<Slot> {
    vec![
        ("input.border", Some(p.border1)),
        ("input.background", Some(p.input_bg)),
        ("input.placeholderForeground", Some(dilute(p.fg, 40.0))),
        ("inputOption.activeBorder", Some(p.fg)),
    ]
}

fn scrollbar(p: &Palette) -> Vec<Slot> {
    vec![
        ("scrollbar.shadow", Some(p.shadow0)),
        ("scrollbarSlider.background", Some(dilute(p.fg, 50.0))),
        ("scrollbarSlider.hoverBackground", Some(dilute(p.fg, 60.0))),
        ("scrollbarSlider.activeBackground", Some(dilute(p.fg, 70.0))),
    ]
}

fn command_center(p: &Palette) -> Vec<Slot> {
    vec![
        ("commandCenter.foreground", Some(p.fg)),
        ("commandCenter.inactiveForeground", Some(dilute(p.fg, 50.0))),
        ("commandCenter.background", Some(p.titlebar_bg)),
        ("commandCenter.border", Some(p.border0)),
        ("commandCenter.inactiveBorder", Some(p.border0)),
        ("commandCenter.activeBackground", Some(dilute(p.fg, 10.0))),
        ("commandCenter.activeBorder", Some(p.border0)),
    ]
}

fn lists(p: &Palette) -> Vec<Slot> {
    vec![
        ("quickInput.background", Some(p.widget_bg)),
        ("list.errorForeground", Some(p.red)),
        ("list.warningForeground", Some(p.yellow)),
        ("list.highlightForeground", Some(p.accent1)),
        ("list.focusForeground", Some(p.fg)),
        ("list.focusBackground", Some(p.accent_focus_bg)),
        ("list.focusHighlightForeground", Some(p.accent1)),
        ("list.activeSelectionIconForeground", Some(p.active_selection_fg)),
        ("list.activeSelectionForeground", Some(p.active_selection_fg)),
        ("list.activeSelectionBackground", Some(p.active_selection_bg)),
        ("list.focusSelectionForeground", Some(p.active_selection_fg)),
        ("list.focusSelectionBackground", Some(p.active_selection_bg)),
        ("list.inactiveSelectionIconForeground", Some(p.fg)),
        ("list.inactiveSelectionForeground", Some(p.fg)),
        ("list.inactiveSelectionBackground", Some(p.inactive_selection_bg)),
        ("quickInputList.focusBackground", Some(p.active_selection_bg)),
        ("quickInputList.focusForeground", Some(p.active_selection_fg)),
        ("quickInputList.focusIconForeground", Some(p.active_selection_fg)),
        ("list.hoverBackground", Some(dilute(p.accent0, 10.0))),
    ]
}

fn status_bar(p: &Palette) -> Vec<Slot> {
    let fg = p.statusbar_fg;
    let bg = p.statusbar_bg;
    vec![
        ("statusBar.border", Some(p.border_status)),
        ("statusBarItem.activeBackground", Some(dilute(fg, 20.0))),
        ("statusBarItem.hoverBackground", Some(dilute(fg, 10.0))),
        ("statusBarItem.prominentBackground", Some(dilute(fg, 30.0))),
        ("statusBar.background", Some(bg)),
        ("statusBar.debuggingBackground", Some(bg)),
        ("statusBar.noFolderBackground", Some(bg)),
        ("statusBar.foreground", Some(fg)),
    ]
}

fn badge(p: &Palette) -> Vec<Slot> {
    vec![
        ("badge.foreground", Some(p.bg)),
        ("badge.background", Some(p.fg)),
    ]
}

fn menu(p: &Palette) -> Vec<Slot> {
    vec![
        ("menu.background", Some(p.widget_bg)),
        ("menu.foreground", Some(p.fg)),
        ("menu.selectionBackground", Some(p.active_selection_bg)),
        ("menu.selectionForeground", Some(p.active_selection_fg)),
        ("menu.separatorBackground", Some(p.border0)),
    ]
}

fn keybinding_labels(p: &Palette) -> Vec<Slot> {
    vec![
        ("keybindingLabel.background", Some(Color::TRANSPARENT)),
        ("keybindingLabel.foreground", Some(p.fg)),
        ("keybindingLabel.border", Some(p.border0)),
        ("keybindingLabel.bottomBorder", Some(p.border1)),
    ]
}

fn activity_bar(p: &Palette) -> Vec<Slot> {
    vec![
        ("activityBar.border", Some(p.border0)),
        ("activityBar.background", Some(p.activity_bar_bg)),
        ("activityBar.foreground", Some(p.fg)),
        ("activityBar.inactiveForeground", Some(dilute(p.fg, 50.0))),
        ("activityBarBadge.background", Some(p.fg)),
        ("activityBarBadge.foreground", Some(p.bg)),
        ("activityBar.activeBorder", Some(p.fg)),
        ("activityBar.activeBackground", Some(dilute(p.fg, 10.0))),
    ]
}

fn bracket_highlight(p: &Palette) -> Vec<Slot> {
    let [b1, b2, b3] = p.brackets;
    vec![
        ("editorBracketHighlight.foreground1", Some(b1)),
        ("editorBracketHighlight.foreground2", Some(b2)),
        ("editorBracketHighlight.foreground3", Some(b3)),
        ("editorBracketHighlight.foreground4", Some(b1)),
        ("editorBracketHighlight.foreground5", Some(b2)),
        ("editorBracketHighlight.foreground6", Some(b3)),
        ("editorBracketHighlight.unexpectedBracket.foreground", Some(p.red)),
    ]
}

fn editor(p: &Palette) -> Vec<Slot> {
    vec![
        ("editor.foreground", Some(p.fg)),
        ("editor.background", Some(p.bg)),
        ("editorWidget.foreground", Some(p.fg)),
        ("editorWidget.background", Some(p.widget_bg)),
        ("editorWidget.border", Some(p.widget_border)),
        ("editorWidget.resizeBorder", Some(p.border1)),
        ("editorBracketMatch.background", Some(p.bracket_match_bg)),
        ("editorBracketMatch.border", Some(p.bracket_match_border)),
        ("editor.findMatchBackground", Some(dilute(p.orange, 50.0))),
        ("editor.findMatchHighlightBackground", Some(dilute(p.yellow, 50.0))),
        ("editor.findRangeHighlightBackground", Some(dilute(p.orange, 50.0))),
        ("editor.foldBackground", Some(Color::TRANSPARENT)),
        ("editorLink.activeForeground", Some(p.cyan)),
        ("editor.lineHighlightBackground", Some(p.line_highlight_bg)),
        ("editor.rangeHighlightBackground", Some(dilute(p.orange, 10.0))),
        ("editor.selectionBackground", Some(p.text_selection_bg)),
        ("editor.inactiveSelectionBackground", Some(p.text_selection_bg)),
        ("editor.wordHighlightBackground", Some(dilute(p.blue, 15.0))),
        ("editor.wordHighlightStrongBackground", Some(dilute(p.purple, 20.0))),
        ("editorOverviewRuler.border", Some(p.ruler)),
        ("editorCursor.foreground", Some(p.accent1)),
        ("editorGroup.border", Some(p.border0)),
        ("editorRuler.foreground", Some(p.ruler)),
        ("editorWhitespace.foreground", Some(p.ruler)),
        ("editorIndentGuide.background", Some(p.ruler)),
        ("editorIndentGuide.activeBackground", Some(dilute(p.fg, 30.0))),
        ("editorLineNumber.foreground", Some(dilute(p.fg, 30.0))),
        ("editorLineNumber.activeForeground", Some(p.fg)),
        ("editorCodeLens.foreground", Some(dilute(p.fg, 60.0))),
        ("editorLightBulb.foreground", Some(p.yellow)),
        ("editorLightBulbAutoFix.foreground", Some(p.blue)),
    ]
}

fn editor_gutter(p: &Palette) -> Vec<Slot> {
    vec![
        ("editorGutter.background", None),
        ("editorGutter.modifiedBackground", Some(p.ansi.magenta)),
        ("editorGutter.addedBackground", Some(p.ansi.blue)),
        ("editorGutter.deletedBackground", Some(p.ansi.red)),
        ("editorGutter.commentRangeForeground", None),
        ("editorGutter.commentGlyphForeground", None),
        ("editorGutter.commentUnresolvedGlyphForeground", None),
        ("editorGutter.foldingControlForeground", None),
    ]
}

fn peek_view(p: &Palette) -> Vec<Slot> {
    vec![
        ("peekView.border", Some(p.border1)),
        ("peekViewTitle.background", Some(p.widget_bg)),
        ("peekViewTitleLabel.foreground", Some(p.fg)),
        ("peekViewTitleDescription.foreground", Some(dilute(p.fg, 60.0))),
        ("peekViewEditor.background", Some(p.widget_bg)),
        ("peekViewResult.background", Some(p.widget_bg)),
        ("peekViewResult.fileForeground", Some(p.fg)),
        ("peekViewResult.lineForeground", Some(p.fg)),
        ("peekViewEditor.matchHighlightBackground", Some(dilute(p.yellow, 50.0))),
        ("peekViewResult.matchHighlightBackground", Some(dilute(p.yellow, 50.0))),
    ]
}

fn notifications(p: &Palette) -> Vec<Slot> {
    vec![
        ("notificationCenter.border", None),
        ("notificationCenterHeader.foreground", Some(p.fg)),
        ("notificationCenterHeader.background", Some(p.widget_bg)),
        ("notificationToast.border", Some(p.widget_border)),
        ("notifications.foreground", Some(p.fg)),
        ("notifications.background", Some(p.widget_bg)),
        // Separator between notifications in the center
        ("notifications.border", None),
        ("notificationLink.foreground", Some(p.cyan)),
    ]
}

fn drag_and_drop(p: &Palette) -> Vec<Slot> {
    let color = Some(dilute(p.accent0, 30.0));
    vec![
        ("list.dropBackground", color),
        ("activityBar.dropBorder", Some(p.accent0)),
        ("sideBar.dropBackground", color),
        ("editorGroup.dropBackground", color),
        ("panel.dropBorder", Some(p.accent0)),
    ]
}

fn buttons(p: &Palette) -> Vec<Slot> {
    vec![
        ("button.background", Some(p.fg)),
        ("button.foreground", Some(p.bg)),
        ("button.hoverBackground", None),
        ("button.border", None),
        ("button.separator", Some(dilute(p.bg, 30.0))),
        ("button.secondaryBackground", Some(p.widget_bg)),
        ("button.secondaryForeground", Some(p.fg)),
        ("button.secondaryHoverBackground", Some(dilute(p.widget_bg, 95.0))),
    ]
}

fn panel(p: &Palette) -> Vec<Slot> {
    vec![
        ("panel.background", Some(p.bg)),
        ("panel.border", Some(p.border0)),
        ("panelSection.border", Some(p.border0)),
        ("panelSectionHeader.border", Some(p.border0)),
        ("panelTitle.activeBorder", Some(dilute(p.fg, 50.0))),
        ("panelTitle.activeForeground", Some(p.fg)),
        ("panelTitle.inactiveForeground", Some(dilute(p.fg, 60.0))),
    ]
}

fn side_bar(p: &Palette) -> Vec<Slot> {
    vec![
        ("sideBar.border", Some(p.border0)),
        ("sideBar.background", Some(p.sidebar_bg)),
        ("sideBarSectionHeader.background", Some(p.titlebar_bg)),
        ("sideBarSectionHeader.border", Some(p.border0)),
    ]
}

fn tabs(p: &Palette) -> Vec<Slot> {
    let bg = p.bg;
    vec![
        ("tab.border", Some(bg)),
        ("editorGroupHeader.tabsBorder", Some(p.border0)),
        ("editorGroupHeader.border", Some(p.border0)),
        ("breadcrumb.background", Some(bg)),
        ("editorGroupHeader.noTabsBackground", Some(bg)),
        ("editorGroupHeader.tabsBackground", Some(bg)),
        ("tab.hoverBackground", Some(dilute(p.accent0, 10.0))),
        ("tab.activeBorder", Some(p.accent0)),
        ("tab.unfocusedActiveBorder", Some(p.accent0)),
        ("tab.activeBorderTop", None),
        ("tab.unfocusedActiveBorderTop", None),
        ("tab.activeBackground", Some(p.inactive_selection_bg)),
        ("tab.activeForeground", Some(p.fg)),
        ("tab.inactiveBackground", Some(bg)),
        ("tab.inactiveForeground", Some(dilute(p.fg, 80.0))),
    ]
}

fn diff_editor(p: &Palette) -> Vec<Slot> {
    let inserted = p.ansi.blue;
    let removed = p.ansi.red;
    vec![
        ("diffEditor.insertedTextBackground", Some(dilute(inserted, 25.0))),
        ("diffEditor.insertedTextBorder", None),
        ("diffEditor.removedTextBackground", Some(dilute(removed, 25.0))),
        ("diffEditor.removedTextBorder", None),
        ("diffEditor.border", Some(p.border0)),
        ("diffEditor.diagonalFill", Some(dilute(p.fg, 10.0))),
        ("diffEditor.insertedLineBackground", Some(dilute(inserted, 15.0))),
        ("diffEditor.removedLineBackground", Some(dilute(removed, 15.0))),
        ("diffEditorGutter.insertedLineBackground", Some(dilute(inserted, 25.0))),
        ("diffEditorGutter.removedLineBackground", Some(dilute(removed, 25.0))),
        ("diffEditorOverview.insertedForeground", Some(inserted)),
        ("diffEditorOverview.removedForeground", Some(removed)),
    ]
}

fn merge_conflicts(p: &Palette) -> Vec<Slot> {
    let current = p.ansi.blue;
    let incoming = p.ansi.red;
    vec![
        ("merge.currentHeaderBackground", Some(dilute(current, 65.0))),
        ("merge.currentContentBackground", Some(dilute(current, 25.0))),
        ("merge.incomingHeaderBackground", Some(dilute(incoming, 65.0))),
        ("merge.incomingContentBackground", Some(dilute(incoming, 25.0))),
        ("merge.border", None),
        ("merge.commonContentBackground", None),
        ("merge.commonHeaderBackground", None),
    ]
}

fn git_decorations(p: &Palette) -> Vec<Slot> {
    vec![
        ("gitDecoration.modifiedResourceForeground", Some(mix(p.orange, p.fg, 20.0))),
        ("gitDecoration.deletedResourceForeground", Some(mix(p.red, p.fg, 20.0))),
        ("gitDecoration.untrackedResourceForeground", Some(mix(p.blue, p.fg, 20.0))),
        ("gitDecoration.conflictingResourceForeground", Some(mix(p.cyan, p.fg, 20.0))),
        ("gitDecoration.ignoredResourceForeground", Some(dilute(p.fg, 40.0))),
    ]
}

fn title_bar(p: &Palette) -> Vec<Slot> {
    vec![
        ("titleBar.activeBackground", Some(p.titlebar_bg)),
        ("titleBar.activeForeground", Some(p.fg)),
        ("titleBar.inactiveBackground", Some(p.titlebar_bg)),
        ("titleBar.inactiveForeground", Some(dilute(p.fg, 70.0))),
        ("titleBar.border", Some(p.border0)),
    ]
}

fn dropdown(p: &Palette) -> Vec<Slot> {
    vec![
        ("dropdown.background", Some(p.input_bg)),
        ("dropdown.listBackground", Some(p.widget_bg)),
        ("dropdown.border", Some(p.border1)),
        ("dropdown.foreground", Some(p.fg)),
    ]
}

fn highlight_borders() -> Vec<Slot> {
    vec![
        ("editor.selectionHighlightBorder", None),
        ("editor.wordHighlightBorder", None),
        ("editor.wordHighlightStrongBorder", None),
        ("editor.findMatchBorder", None),
        ("editor.findMatchHighlightBorder", None),
        ("editor.findRangeHighlightBorder", None),
        ("editor.rangeHighlightBorder", None),
    ]
}

fn terminal(p: &Palette) -> Vec<Slot> {
    let t = &p.ansi;
    vec![
        ("terminal.foreground", Some(p.t_fg)),
        ("terminal.background", Some(p.bg)),
        ("terminal.selectionBackground", Some(p.text_selection_bg)),
        ("terminalCursor.foreground", Some(p.accent1)),
        ("terminal.ansiBlack", Some(t.black)),
        ("terminal.ansiBlue", Some(t.blue)),
        ("terminal.ansiBrightBlack", Some(t.black)),
        ("terminal.ansiBrightBlue", Some(t.blue)),
        ("terminal.ansiBrightCyan", Some(t.cyan)),
        ("terminal.ansiBrightGreen", Some(t.green)),
        ("terminal.ansiBrightMagenta", Some(t.magenta)),
        ("terminal.ansiBrightRed", Some(t.red)),
        ("terminal.ansiBrightWhite", Some(t.white)),
        ("terminal.ansiBrightYellow", Some(t.yellow)),
        ("terminal.ansiCyan", Some(t.cyan)),
        ("terminal.ansiGreen", Some(t.green)),
        ("terminal.ansiMagenta", Some(t.magenta)),
        ("terminal.ansiRed", Some(t.red)),
        ("terminal.ansiWhite", Some(t.white)),
        ("terminal.ansiYellow", Some(t.yellow)),
    ]
}

fn text_links(p: &Palette) -> Vec<Slot> {
    vec![
        ("textLink.foreground", Some(p.cyan)),
        ("textLink.activeForeground", Some(p.accent1)),
        ("textBlockQuote.background", Some(Color::TRANSPARENT)),
        ("textBlockQuote.border", Some(p.fg)),
        ("textPreformat.foreground", Some(p.uno[1])),
    ]
}
