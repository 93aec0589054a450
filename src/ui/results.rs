// SPDX-License-Identifier: MPL-2.0
//! Analysis results: score card, skills gap, optimization report, and
//! the resume preview.
//!
//! Everything here is read-only rendering of one `AnalysisOutcome`; the
//! section emits no messages of its own.

use crate::api::{AnalysisOutcome, ScoreBand};
use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use crate::ui::theming::score_color;
use iced::{
    alignment::Vertical,
    widget::{container, progress_bar, scrollable, text, Column, Row, Text},
    Color, Element, Length,
};

/// Chips rendered per row before wrapping onto the next one.
const CHIPS_PER_ROW: usize = 4;

/// Display caps matching what fits the cards without scrolling.
const MAX_CV_SKILLS: usize = 8;
const MAX_MATCHED_SKILLS: usize = 6;
const MAX_MISSING_SKILLS: usize = 8;

/// Contextual data needed to render the results section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub outcome: &'a AnalysisOutcome,
}

/// Render the full results section.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::LG)
        .push(build_score_panel(&ctx))
        .push(build_skills_panel(&ctx))
        .push(build_report_panel(&ctx))
        .push(build_preview_panel(&ctx))
        .width(Length::Fill)
        .into()
}

fn build_score_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let analysis = &ctx.outcome.analysis;
    let title = Text::new(ctx.i18n.tr("ats-section-title")).size(typography::TITLE_SM);

    let band = ScoreBand::from_score(analysis.score);
    let score_figure = Text::new(format!("{}", analysis.score.round() as i64))
        .size(typography::TITLE_LG)
        .color(score_color(band));

    let score_block = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("score-overall")).size(typography::CAPTION))
        .push(score_figure);

    let profession_block = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("score-detected")).size(typography::CAPTION))
        .push(Text::new(ctx.outcome.profession.display_name.clone()).size(typography::TITLE_MD));

    let headline = Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(score_block)
        .push(profession_block);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(headline)
        .push(build_ratio_bar(
            ctx.i18n.tr("score-similarity"),
            analysis.similarity,
        ))
        .push(build_ratio_bar(
            ctx.i18n.tr("score-coverage"),
            analysis.coverage,
        ));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(container_styles::panel)
        .into()
}

/// A labeled progress bar for a `0.0..=1.0` ratio, with the rounded
/// percentage printed after the label.
fn build_ratio_bar<'a>(label: String, ratio: f32) -> Element<'a, Message> {
    let percent = (ratio * 100.0).round() as i64;

    let caption = Row::new()
        .spacing(spacing::XS)
        .push(Text::new(label).size(typography::BODY))
        .push(Text::new(format!("{percent}%")).size(typography::BODY));

    Column::new()
        .spacing(spacing::XXS)
        .push(caption)
        .push(
            progress_bar(0.0..=1.0, ratio)
                .girth(sizing::PROGRESS_BAR_HEIGHT),
        )
        .into()
}

fn build_skills_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let skills = &ctx.outcome.skills;
    let analysis = &ctx.outcome.analysis;

    let title = Text::new(ctx.i18n.tr("skills-section-title")).size(typography::TITLE_SM);

    let yours = build_skill_group(
        ctx.i18n.tr("skills-yours"),
        &skills.cv_skills,
        MAX_CV_SKILLS,
        palette::PRIMARY_500,
        SkillFallback::Muted(ctx.i18n.tr("skills-none-found")),
    );

    let matched = build_skill_group(
        ctx.i18n.tr("skills-matched"),
        &skills.matched_skills,
        MAX_MATCHED_SKILLS,
        palette::SUCCESS_500,
        SkillFallback::Muted(ctx.i18n.tr("skills-no-matches")),
    );

    let missing = build_skill_group(
        ctx.i18n.tr("skills-missing"),
        &analysis.missing,
        MAX_MISSING_SKILLS,
        palette::ERROR_500,
        SkillFallback::Chip(ctx.i18n.tr("skills-no-gaps"), palette::SUCCESS_500),
    );

    let job_req_value = if skills.job_skills.is_empty() {
        text(ctx.i18n.tr("skills-none-required"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
    } else {
        text(skills.job_skills.join(", ")).size(typography::BODY)
    };

    let job_req = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("skills-job-req")).size(typography::BODY))
        .push(job_req_value);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(yours)
        .push(matched)
        .push(missing)
        .push(job_req);

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(container_styles::panel)
        .into()
}

/// What to show when a skill list is empty.
enum SkillFallback {
    /// Grayed-out note text.
    Muted(String),
    /// A single chip carrying the note, in the given accent.
    Chip(String, Color),
}

fn build_skill_group<'a>(
    label: String,
    skills: &[String],
    cap: usize,
    accent: Color,
    fallback: SkillFallback,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = if skills.is_empty() {
        match fallback {
            SkillFallback::Muted(note) => text(note)
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .into(),
            SkillFallback::Chip(note, chip_accent) => build_chip_rows(
                std::iter::once(note).collect::<Vec<_>>(),
                chip_accent,
            ),
        }
    } else {
        let capped: Vec<String> = skills.iter().take(cap).cloned().collect();
        build_chip_rows(capped, accent)
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(body)
        .into()
}

/// Lays chips out in fixed-width rows since long skill lists overflow a
/// single row.
fn build_chip_rows<'a>(labels: Vec<String>, accent: Color) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::XXS);

    for chunk in labels.chunks(CHIPS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::XXS);
        for label in chunk {
            let chip = container(text(label.clone()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(container_styles::chip(accent));
            row = row.push(chip);
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn build_report_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let analysis = &ctx.outcome.analysis;
    let profession = &ctx.outcome.profession;

    let title = Text::new(ctx.i18n.tr("report-section-title")).size(typography::TITLE_SM);

    let mut content = Column::new().spacing(spacing::MD).push(title);

    if !analysis.issues.is_empty() {
        content = content.push(build_bullet_block(
            ctx.i18n.tr("report-issues"),
            Some(palette::WARNING_500),
            &analysis.issues,
        ));
    }

    if !analysis.suggestions.is_empty() {
        content = content.push(build_bullet_block(
            ctx.i18n.tr("report-suggestions"),
            None,
            &analysis.suggestions,
        ));
    }

    content = content.push(build_sections_block(ctx));
    content = content.push(build_profession_badge(profession));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(container_styles::panel)
        .into()
}

fn build_bullet_block<'a>(
    heading: String,
    heading_color: Option<Color>,
    items: &[String],
) -> Element<'a, Message> {
    let mut heading_text = Text::new(heading).size(typography::BODY_LG);
    if let Some(color) = heading_color {
        heading_text = heading_text.color(color);
    }

    let mut block = Column::new().spacing(spacing::XXS).push(heading_text);
    for item in items {
        block = block.push(Text::new(format!("• {item}")).size(typography::BODY));
    }

    block.into()
}

fn build_sections_block<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let analysis = &ctx.outcome.analysis;
    let (done, total) = analysis.sections_summary();

    let heading = Text::new(format!(
        "{} ({done}/{total})",
        ctx.i18n.tr("report-sections")
    ))
    .size(typography::BODY_LG);

    let labels: Vec<String> = analysis
        .sections
        .iter()
        .map(|(name, present)| {
            let mark = if *present { "✅" } else { "❌" };
            format!("{mark} {name}")
        })
        .collect();

    Column::new()
        .spacing(spacing::XXS)
        .push(heading)
        .push(build_chip_rows(labels, palette::PRIMARY_500))
        .into()
}

fn build_profession_badge<'a>(
    profession: &crate::api::Profession,
) -> Element<'a, Message> {
    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(profession.display_name.clone()).size(typography::BODY_LG))
        .push(
            Text::new(profession.description.clone())
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new("🎯").size(typography::TITLE_MD))
        .push(details);

    container(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(container_styles::inset)
        .into()
}

fn build_preview_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("cv-preview-title")).size(typography::TITLE_SM);

    let preview = scrollable(
        container(text(ctx.outcome.cv_preview.clone()).size(typography::BODY_SM))
            .padding(spacing::SM)
            .width(Length::Fill),
    )
    .height(Length::Fixed(sizing::PREVIEW_HEIGHT));

    let content = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(container(preview).style(container_styles::inset).width(Length::Fill));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(container_styles::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AnalysisResult, Profession, SkillSets};
    use std::collections::BTreeMap;

    fn sample_outcome() -> AnalysisOutcome {
        let mut sections = BTreeMap::new();
        sections.insert("experience".to_string(), true);
        sections.insert("education".to_string(), false);

        AnalysisOutcome {
            analysis: AnalysisResult {
                score: 72.4,
                similarity: 0.61,
                coverage: 0.58,
                missing: vec!["kubernetes".to_string()],
                issues: vec!["Missing contact details".to_string()],
                suggestions: vec!["Add measurable impact".to_string()],
                sections,
            },
            profession: Profession {
                name: "software_developer".to_string(),
                display_name: "Software Developer".to_string(),
                description: "Builds and maintains software".to_string(),
            },
            skills: SkillSets {
                job_skills: vec!["rust".to_string(), "sql".to_string()],
                cv_skills: vec!["rust".to_string()],
                matched_skills: vec!["rust".to_string()],
            },
            cv_preview: "Jane Doe\nSoftware Developer".to_string(),
        }
    }

    #[test]
    fn view_returns_element() {
        let i18n = I18n::default();
        let outcome = sample_outcome();
        let _element = view(ViewContext {
            i18n: &i18n,
            outcome: &outcome,
        });
    }

    #[test]
    fn view_handles_empty_lists() {
        let i18n = I18n::default();
        let outcome = AnalysisOutcome::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            outcome: &outcome,
        });
    }

    #[test]
    fn chip_rows_wrap_after_four() {
        let labels: Vec<String> = (0..6).map(|i| format!("skill-{i}")).collect();
        let _element = build_chip_rows(labels, palette::PRIMARY_500);
    }
}
