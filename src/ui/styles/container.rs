// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the form, results, and coach cards.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill-shaped chip tinted with an accent color, used for skill lists
/// and section flags. The accent also colors the border so chips stay
/// legible on both surfaces.
pub fn chip(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..accent
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Bordered block for report entries and the resume preview, slightly
/// recessed from the surrounding panel.
pub fn inset(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Left-accented block used for the chat transcript trailers: the
/// error block and the completion hint.
pub fn accent_block(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();

        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            text_color: Some(palette.background.base.text),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn panel_keeps_surface_translucent() {
        let style = panel(&Theme::Dark);
        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg.a, opacity::SURFACE);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn chip_uses_the_accent_for_border_and_fill() {
        let style_fn = chip(palette::SUCCESS_500);
        let style = style_fn(&Theme::Light);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg.r, palette::SUCCESS_500.r);
            assert!(bg.a < 1.0);
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.border.color.g, palette::SUCCESS_500.g);
    }
}
