//! Demo screen showcasing the theme toggle
//!
//! [`ThemeToggleScreen`] composes the toggle in each size, inside a branded
//! header, and side by side, then shows a usage snippet and the current
//! theme. Every toggle on the screen is wired to the store's toggle.

use serde::Serialize;

use crate::components::{
    Alignment, Container, FlexDirection, Spacing, StyleProps, Text, TextAlign,
};
use crate::provider::{Result, ThemeContext, ThemeScope};
use crate::theme::{Gradient, Palette, ThemeName};
use crate::theme_toggle::{ThemeToggle, ThemeToggleSize, ThemeToggleView};
use crate::tokens::{font_size, font_weight, radius, spacing, SUBTITLE_WHITE};

/// Snippet shown in the "Usage Examples" section
pub const USAGE_SNIPPET: &str = "<ThemeToggle onToggle={toggleTheme} />\n\n\
<ThemeToggle size=\"small\" />\n\n\
<ThemeToggle size=\"large\" />\n\n\
<ThemeToggle\n  onToggle={() => console.log(\"Toggled!\")}\n  style={{ marginTop: 20 }}\n/>";

/// Status bar content style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    /// Light glyphs, for dark backgrounds
    LightContent,
    /// Dark glyphs, for light backgrounds
    DarkContent,
}

impl StatusBarStyle {
    /// Style that stays legible on `theme`
    pub fn for_theme(theme: ThemeName) -> Self {
        if theme.is_dark() {
            StatusBarStyle::LightContent
        } else {
            StatusBarStyle::DarkContent
        }
    }
}

/// A node in a section body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Text run
    Text(Text),
    /// Theme toggle control
    Toggle(ThemeToggleView),
    /// Horizontal group
    Row {
        /// Row layout
        container: Container,
        /// Row children
        children: Vec<Node>,
    },
    /// Gradient banner
    Banner(BannerView),
}

/// Gradient banner with title and subtitle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    /// Background gradient
    pub gradient: Gradient,
    /// Banner layout
    pub container: Container,
    /// Toggle placed in the banner, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle: Option<ThemeToggleView>,
    /// Title line
    pub title: Text,
    /// Subtitle line
    pub subtitle: Text,
}

/// One titled card on the screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    /// Section heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
    /// Card surface
    pub card: Container,
    /// Card content
    pub body: Vec<Node>,
}

/// Rendered screen
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenView {
    /// Theme the screen was rendered with
    pub theme: ThemeName,
    /// Status bar style
    pub status_bar: StatusBarStyle,
    /// Root container
    pub container: Container,
    /// Top banner
    pub header: BannerView,
    /// Scrollable sections, top to bottom
    pub sections: Vec<SectionView>,
    #[serde(skip)]
    toggles: Vec<ThemeToggle>,
}

impl ScreenView {
    /// Every toggle on the screen in document order
    pub fn toggles(&self) -> &[ThemeToggle] {
        &self.toggles
    }

    /// Activate the toggle at `index`; returns false if there is none
    pub fn press_toggle(&self, index: usize) -> bool {
        match self.toggles.get(index) {
            Some(toggle) => toggle.press(),
            None => {
                tracing::warn!(index, count = self.toggles.len(), "No toggle at index");
                false
            }
        }
    }

    /// Find a section by its title text
    pub fn section(&self, title: &str) -> Option<&SectionView> {
        self.sections
            .iter()
            .find(|s| s.title.as_ref().map(|t| t.content.as_str()) == Some(title))
    }
}

/// The theme toggle showcase screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeToggleScreen {
    /// Header title
    pub title: String,
    /// Header subtitle
    pub subtitle: String,
}

impl Default for ThemeToggleScreen {
    fn default() -> Self {
        Self {
            title: "Theme Toggle".to_string(),
            subtitle: "Switch between light and dark modes".to_string(),
        }
    }
}

impl ThemeToggleScreen {
    /// Create the screen with default copy
    pub fn new() -> Self {
        Self::default()
    }

    /// Render from the scope's theme context
    ///
    /// Fails with [`ThemeError::NotInitialized`](crate::provider::ThemeError)
    /// when the scope has no store.
    pub fn render(&self, scope: &ThemeScope) -> Result<ScreenView> {
        let ctx = scope.use_theme()?;
        let colors = ctx.colors();
        let mut builder = ScreenBuilder {
            ctx: &ctx,
            scope,
            toggles: Vec::new(),
        };

        let header = BannerView {
            gradient: Gradient::header(colors),
            container: Container::column()
                .with_align(Alignment::Center)
                .with_gap(spacing::SPACE_SM)
                .with_style(StyleProps {
                    padding: Some(Spacing::individual(
                        spacing::SPACE_HEADER_TOP,
                        spacing::SPACE_2XL,
                        spacing::SPACE_4XL,
                        spacing::SPACE_2XL,
                    )),
                    border_radius: Some(radius::HEADER),
                    elevation: Some(10.0),
                    ..Default::default()
                }),
            toggle: None,
            title: Text::heading(&self.title, font_size::DISPLAY).with_color("white"),
            subtitle: Text::new(&self.subtitle)
                .with_size(font_size::MD)
                .with_weight(font_weight::MEDIUM)
                .with_color(SUBTITLE_WHITE),
        };

        let mut sections = Vec::new();
        for (title, size, description) in [
            ("Default Size", ThemeToggleSize::Default, "Tap to toggle theme"),
            ("Small Size", ThemeToggleSize::Small, "Compact toggle button"),
            ("Large Size", ThemeToggleSize::Large, "Larger toggle button"),
        ] {
            let toggle = builder.toggle(size, StyleProps::default());
            sections.push(builder.card(
                title,
                vec![toggle, builder.description(description)],
            ));
        }

        sections.push(builder.header_example());

        let row = Node::Row {
            container: Container::row()
                .with_align(Alignment::Center)
                .with_gap(spacing::SPACE_XL),
            children: ThemeToggleSize::ALL
                .into_iter()
                .map(|size| builder.toggle(size, StyleProps::default()))
                .collect(),
        };
        sections.push(builder.card("Multiple Sizes Together", vec![row]));

        sections.push(builder.usage_examples());
        sections.push(builder.current_theme());

        tracing::debug!(
            theme = %ctx.theme(),
            toggles = builder.toggles.len(),
            "Rendered theme toggle screen"
        );

        Ok(ScreenView {
            theme: ctx.theme(),
            status_bar: StatusBarStyle::for_theme(ctx.theme()),
            container: Container {
                direction: FlexDirection::Column,
                ..Default::default()
            }
            .with_background(colors.background),
            header,
            sections,
            toggles: builder.toggles,
        })
    }
}

struct ScreenBuilder<'a> {
    ctx: &'a ThemeContext,
    scope: &'a ThemeScope,
    toggles: Vec<ThemeToggle>,
}

impl ScreenBuilder<'_> {
    fn colors(&self) -> &'static Palette {
        self.ctx.colors()
    }

    fn toggle(&mut self, size: ThemeToggleSize, style: StyleProps) -> Node {
        let view = self.toggle_view(size, style);
        Node::Toggle(view)
    }

    fn toggle_view(&mut self, size: ThemeToggleSize, style: StyleProps) -> ThemeToggleView {
        let toggle = ThemeToggle::new()
            .with_size(size)
            .with_style(style)
            .on_toggle(self.ctx.toggle_handler());
        let view = toggle.render(self.scope);
        self.toggles.push(toggle);
        view
    }

    fn title(&self, title: &str) -> Text {
        Text::new(title)
            .with_size(font_size::XL)
            .with_weight(font_weight::SEMIBOLD)
            .with_color(self.colors().text)
    }

    fn description(&self, text: &str) -> Node {
        Node::Text(
            Text::new(text)
                .with_color(self.colors().text_secondary)
                .with_align(TextAlign::Center),
        )
    }

    fn card(&self, title: &str, body: Vec<Node>) -> SectionView {
        SectionView {
            title: Some(self.title(title)),
            card: Container::column()
                .with_align(Alignment::Center)
                .with_gap(spacing::SPACE_LG)
                .with_padding(Spacing::uniform(spacing::SPACE_2XL))
                .with_background(self.colors().surface)
                .with_radius(radius::XL),
            body,
        }
    }

    fn header_example(&mut self) -> SectionView {
        let colors = self.colors();
        let toggle = self.toggle_view(
            ThemeToggleSize::Default,
            StyleProps::absolute(spacing::SPACE_XL, spacing::SPACE_XL),
        );

        let banner = BannerView {
            gradient: Gradient::header(colors),
            container: Container::column()
                .with_align(Alignment::Center)
                .with_gap(spacing::SPACE_SM)
                .with_padding(Spacing::individual(
                    spacing::SPACE_HEADER_TOP,
                    spacing::SPACE_XL,
                    spacing::SPACE_XL,
                    spacing::SPACE_XL,
                )),
            toggle: Some(toggle),
            title: Text::heading("App Header", font_size::XXL).with_color("white"),
            subtitle: Text::new("Theme toggle in header").with_color(SUBTITLE_WHITE),
        };

        SectionView {
            title: Some(self.title("In Header (Like Pokedex)")),
            card: Container::column()
                .with_background(colors.surface)
                .with_radius(radius::XL),
            body: vec![Node::Banner(banner)],
        }
    }

    fn usage_examples(&self) -> SectionView {
        let colors = self.colors();
        SectionView {
            title: Some(self.title("Usage Examples")),
            card: Container::column().with_style(StyleProps {
                padding: Some(Spacing::uniform(spacing::SPACE_LG)),
                background_color: Some(colors.surface.to_string()),
                border_radius: Some(radius::MD),
                border_width: Some(1.0),
                border_color: Some(colors.border.to_string()),
                ..Default::default()
            }),
            body: vec![Node::Text(Text::code(USAGE_SNIPPET).with_color(colors.text))],
        }
    }

    fn current_theme(&self) -> SectionView {
        let colors = self.colors();
        let label = if self.ctx.is_dark() {
            "🌙 Dark"
        } else {
            "☀️ Light"
        };
        SectionView {
            title: None,
            card: Container::column()
                .with_align(Alignment::Center)
                .with_padding(Spacing::uniform(spacing::SPACE_XL))
                .with_background(colors.surface)
                .with_radius(radius::LG),
            body: vec![Node::Text(
                Text::new(format!("Current Theme: {}", label))
                    .with_size(font_size::LG)
                    .with_weight(font_weight::SEMIBOLD)
                    .with_color(colors.text),
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Position;
    use crate::provider::{ThemeError, ThemeStore};
    use crate::theme::{DARK_PALETTE, LIGHT_PALETTE};
    use crate::theme_toggle::ToggleIcon;

    fn all_toggle_views(view: &ScreenView) -> Vec<&ThemeToggleView> {
        fn walk<'a>(node: &'a Node, out: &mut Vec<&'a ThemeToggleView>) {
            match node {
                Node::Toggle(t) => out.push(t),
                Node::Row { children, .. } => children.iter().for_each(|c| walk(c, out)),
                Node::Banner(b) => out.extend(b.toggle.as_ref()),
                Node::Text(_) => {}
            }
        }
        let mut out = Vec::new();
        for section in &view.sections {
            for node in &section.body {
                walk(node, &mut out);
            }
        }
        out
    }

    fn body_text(section: &SectionView) -> Vec<&str> {
        section
            .body
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_render_requires_store() {
        let err = ThemeToggleScreen::new()
            .render(&ThemeScope::detached())
            .unwrap_err();
        assert_eq!(err, ThemeError::NotInitialized);
    }

    #[test]
    fn test_light_screen_layout() {
        let store = ThemeStore::new(ThemeName::Light);
        let view = ThemeToggleScreen::new().render(&store.scope()).unwrap();

        assert_eq!(view.theme, ThemeName::Light);
        assert_eq!(view.status_bar, StatusBarStyle::DarkContent);
        assert_eq!(
            view.container.style.background_color.as_deref(),
            Some(LIGHT_PALETTE.background)
        );
        assert_eq!(view.header.title.content, "Theme Toggle");
        assert_eq!(
            view.header.subtitle.content,
            "Switch between light and dark modes"
        );
        assert_eq!(view.header.gradient.stops[0].color, LIGHT_PALETTE.primary);
        assert_eq!(view.header.gradient.stops[1].color, LIGHT_PALETTE.primary_light);

        let titles: Vec<_> = view
            .sections
            .iter()
            .filter_map(|s| s.title.as_ref().map(|t| t.content.as_str()))
            .collect();
        assert_eq!(
            titles,
            vec![
                "Default Size",
                "Small Size",
                "Large Size",
                "In Header (Like Pokedex)",
                "Multiple Sizes Together",
                "Usage Examples",
            ]
        );
    }

    #[test]
    fn test_section_colors_follow_palette() {
        let store = ThemeStore::new(ThemeName::Dark);
        let view = ThemeToggleScreen::new().render(&store.scope()).unwrap();

        let section = view.section("Small Size").unwrap();
        assert_eq!(
            section.card.style.background_color.as_deref(),
            Some(DARK_PALETTE.surface)
        );
        assert_eq!(
            section.title.as_ref().unwrap().color.as_deref(),
            Some(DARK_PALETTE.text)
        );
        match &section.body[1] {
            Node::Text(t) => {
                assert_eq!(t.content, "Compact toggle button");
                assert_eq!(t.color.as_deref(), Some(DARK_PALETTE.text_secondary));
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_screen_has_seven_toggles() {
        let store = ThemeStore::new(ThemeName::Light);
        let view = ThemeToggleScreen::new().render(&store.scope()).unwrap();

        assert_eq!(view.toggles().len(), 7);
        let views = all_toggle_views(&view);
        assert_eq!(views.len(), 7);

        let sizes: Vec<_> = views.iter().map(|v| v.size).collect();
        assert_eq!(
            sizes,
            vec![
                ThemeToggleSize::Default,
                ThemeToggleSize::Small,
                ThemeToggleSize::Large,
                ThemeToggleSize::Default,
                ThemeToggleSize::Small,
                ThemeToggleSize::Default,
                ThemeToggleSize::Large,
            ]
        );
        assert!(views.iter().all(|v| v.icon_kind == ToggleIcon::DarkMode));
        assert!(view.toggles().iter().all(|t| t.has_callback()));
    }

    #[test]
    fn test_header_toggle_is_absolutely_positioned() {
        let store = ThemeStore::new(ThemeName::Light);
        let view = ThemeToggleScreen::new().render(&store.scope()).unwrap();

        let section = view.section("In Header (Like Pokedex)").unwrap();
        let banner = match &section.body[0] {
            Node::Banner(b) => b,
            other => panic!("unexpected node {:?}", other),
        };
        let toggle = banner.toggle.as_ref().unwrap();
        assert_eq!(toggle.style.position, Some(Position::Absolute));
        assert_eq!(toggle.style.top, Some(20.0));
        assert_eq!(toggle.style.right, Some(20.0));
        assert_eq!(banner.title.content, "App Header");
    }

    #[test]
    fn test_every_toggle_flips_store() {
        let store = ThemeStore::new(ThemeName::Light);
        let view = ThemeToggleScreen::new().render(&store.scope()).unwrap();

        for index in 0..view.toggles().len() {
            let before = store.theme();
            assert!(view.press_toggle(index));
            assert_eq!(store.theme(), before.toggled());
        }
        assert!(!view.press_toggle(99));
    }

    #[test]
    fn test_rerender_after_toggle() {
        let store = ThemeStore::new(ThemeName::Light);
        let scope = store.scope();
        let screen = ThemeToggleScreen::new();

        let view = screen.render(&scope).unwrap();
        view.press_toggle(0);

        let view = screen.render(&scope).unwrap();
        assert_eq!(view.theme, ThemeName::Dark);
        assert_eq!(view.status_bar, StatusBarStyle::LightContent);
        assert!(all_toggle_views(&view)
            .iter()
            .all(|v| v.icon_kind == ToggleIcon::LightMode));
    }

    #[test]
    fn test_current_theme_display() {
        let store = ThemeStore::new(ThemeName::Light);
        let screen = ThemeToggleScreen::new();

        let view = screen.render(&store.scope()).unwrap();
        let last = view.sections.last().unwrap();
        assert!(last.title.is_none());
        assert_eq!(body_text(last), vec!["Current Theme: ☀️ Light"]);

        store.set_theme(ThemeName::Dark);
        let view = screen.render(&store.scope()).unwrap();
        let last = view.sections.last().unwrap();
        assert_eq!(body_text(last), vec!["Current Theme: 🌙 Dark"]);
    }

    #[test]
    fn test_usage_snippet() {
        let store = ThemeStore::new(ThemeName::Light);
        let view = ThemeToggleScreen::new().render(&store.scope()).unwrap();
        let usage = view.section("Usage Examples").unwrap();

        assert_eq!(body_text(usage), vec![USAGE_SNIPPET]);
        assert_eq!(
            usage.card.style.border_color.as_deref(),
            Some(LIGHT_PALETTE.border)
        );
        assert!(USAGE_SNIPPET.starts_with("<ThemeToggle onToggle={toggleTheme} />"));
    }

    #[test]
    fn test_screen_serialization() {
        let store = ThemeStore::new(ThemeName::Dark);
        let view = ThemeToggleScreen::new().render(&store.scope()).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["theme"], "dark");
        assert_eq!(json["statusBar"], "light-content");
        assert_eq!(json["sections"][0]["body"][0]["type"], "toggle");
        assert_eq!(json["sections"][0]["body"][0]["iconKind"], "light-mode");
        assert_eq!(json["sections"][4]["body"][0]["type"], "row");
        assert!(json.get("toggles").is_none());
    }
}
