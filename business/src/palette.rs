use egui::Color32;

/// Two-color scheme for a rendered code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Color32,
    pub background: Color32,
}

/// Snapshot of the host's display theme, taken at regeneration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub dark_mode: bool,
    pub background: Color32,
}

impl Appearance {
    pub fn light() -> Self {
        Self {
            dark_mode: false,
            background: Color32::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            dark_mode: true,
            background: Color32::from_gray(27),
        }
    }

    /// Reads dark mode and the panel fill from egui visuals.
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        Self {
            dark_mode: visuals.dark_mode,
            background: visuals.panel_fill,
        }
    }

    pub fn palette(&self) -> Palette {
        resolve_palette(self.dark_mode, self.background)
    }
}

/// Modules are white on dark themes and black on light ones; the background
/// always follows the theme.
pub fn resolve_palette(is_dark_mode: bool, theme_background: Color32) -> Palette {
    let foreground = if is_dark_mode {
        Color32::WHITE
    } else {
        Color32::BLACK
    };
    Palette {
        foreground,
        background: theme_background,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_mode_foreground_is_white_for_any_background() {
        for bg in [Color32::BLACK, Color32::WHITE, Color32::from_rgb(10, 20, 30)] {
            let palette = resolve_palette(true, bg);
            assert_eq!(palette.foreground, Color32::WHITE);
            assert_eq!(palette.background, bg);
        }
    }

    #[test]
    fn test_light_mode_foreground_is_black() {
        let bg = Color32::from_rgb(248, 248, 248);
        let palette = resolve_palette(false, bg);
        assert_eq!(palette.foreground, Color32::BLACK);
        assert_eq!(palette.background, bg);
    }

    #[test]
    fn test_appearance_from_egui_visuals() {
        let dark = Appearance::from_visuals(&egui::Visuals::dark());
        assert!(dark.dark_mode);
        assert_eq!(dark.background, egui::Visuals::dark().panel_fill);

        let light = Appearance::from_visuals(&egui::Visuals::light());
        assert!(!light.dark_mode);
        assert_eq!(light.palette().foreground, Color32::BLACK);
    }
}
