// SPDX-License-Identifier: MPL-2.0
//! Career coach panel: quick-question chips, the streaming transcript,
//! and the question input row.
//!
//! The transcript shows at most one exchange. A new question replaces
//! the previous one, and the greeting returns after a clear.

use crate::api::Profession;
use crate::app::Message;
use crate::chat::{ChatPhase, ChatSession};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, text_input, Column, Id, Row, Scrollable, Text},
    Element, Length,
};

/// Scrollable id targeted by the stick-to-bottom task while fragments
/// stream in.
pub const TRANSCRIPT_SCROLLABLE_ID: &str = "chat-transcript-scrollable";

/// Key pairs behind the quick-question chips: chip label, prefilled
/// question.
const QUICK_QUESTIONS: [(&str, &str); 5] = [
    ("quick-project", "quick-project-question"),
    ("quick-optimize", "quick-optimize-question"),
    ("quick-skills", "quick-skills-question"),
    ("quick-interview", "quick-interview-question"),
    ("quick-path", "quick-path-question"),
];

/// Contextual data needed to render the coach panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub chat: &'a ChatSession,
    pub question: &'a str,
    /// Profession from the last successful analysis, if any.
    pub profession: Option<&'a Profession>,
    /// Inline precondition error under the input row.
    pub error_key: Option<&'static str>,
}

/// Render the coach panel.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("coach-section-title")).size(typography::TITLE_SM);
    let lead = text(ctx.i18n.tr("coach-lead"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let mut content = Column::new().spacing(spacing::MD).push(title).push(lead);

    if let Some(profession) = ctx.profession {
        content = content.push(build_profession_badge(&ctx, profession));
    }

    content = content
        .push(build_quick_chips(&ctx))
        .push(build_transcript(&ctx));

    if ctx.chat.is_active() {
        content = content.push(
            text(ctx.i18n.tr("chat-typing"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );
    }

    if let Some(key) = ctx.error_key {
        content = content.push(
            text(ctx.i18n.tr(key))
                .size(typography::BODY_SM)
                .color(palette::ERROR_500),
        );
    }

    content = content.push(build_input_row(&ctx));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(container_styles::panel)
        .into()
}

fn build_profession_badge<'a>(
    ctx: &ViewContext<'a>,
    profession: &'a Profession,
) -> Element<'a, Message> {
    let ready = ctx.i18n.tr_with_args(
        "coach-ready-for",
        &[("profession", profession.display_name.as_str())],
    );

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ready).size(typography::BODY_LG))
        .push(
            Text::new(profession.description.clone())
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new("👨‍💼").size(typography::TITLE_MD))
        .push(details);

    container(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(container_styles::inset)
        .into()
}

fn build_quick_chips<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XXS);

    for (label_key, question_key) in QUICK_QUESTIONS {
        let question = ctx.i18n.tr(question_key);
        let chip = button(text(ctx.i18n.tr(label_key)).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(button_styles::chip)
            .on_press(Message::QuickQuestionPicked(question));
        row = row.push(chip);
    }

    row.into()
}

fn build_transcript<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = if ctx.chat.has_exchange() {
        build_exchange(ctx)
    } else {
        build_greeting(ctx)
    };

    let transcript = Scrollable::new(
        container(body).padding(spacing::SM).width(Length::Fill),
    )
    .id(Id::new(TRANSCRIPT_SCROLLABLE_ID))
    .height(Length::Fixed(sizing::TRANSCRIPT_HEIGHT))
    .width(Length::Fill);

    container(transcript)
        .style(container_styles::inset)
        .width(Length::Fill)
        .into()
}

/// Empty-state greeting shown before the first question and after a
/// clear.
fn build_greeting<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (emoji, title, sub) = match ctx.profession {
        Some(profession) => (
            "👨‍💼",
            ctx.i18n.tr_with_args(
                "coach-ready-for",
                &[("profession", profession.display_name.as_str())],
            ),
            ctx.i18n.tr("coach-lead"),
        ),
        None => (
            "🤖",
            ctx.i18n.tr("coach-ready-generic"),
            ctx.i18n.tr("coach-ready-hint"),
        ),
    };

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(emoji).size(typography::TITLE_LG))
        .push(Text::new(title).size(typography::BODY_LG))
        .push(
            text(sub)
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        )
        .into()
}

/// The question block, the streaming answer, and whichever trailer the
/// session phase calls for.
fn build_exchange<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let chat = ctx.chat;

    let question_block = container(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(ctx.i18n.tr("chat-you")).size(typography::BODY))
            .push(Text::new(format!("\u{201c}{}\u{201d}", chat.question)).size(typography::BODY)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(container_styles::accent_block(palette::PRIMARY_500));

    let mut transcript = Column::new()
        .spacing(spacing::SM)
        .push(question_block)
        .push(Text::new(ctx.i18n.tr("chat-coach")).size(typography::BODY));

    if !chat.answer.is_empty() {
        transcript = transcript.push(Text::new(chat.answer.clone()).size(typography::BODY));
    }

    match chat.phase {
        ChatPhase::Done => {
            transcript = transcript.push(
                text(ctx.i18n.tr("chat-more-hint"))
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            );
            if let Some(ms) = chat.elapsed_ms {
                let stats = ctx
                    .i18n
                    .tr_with_args("chat-response-time", &[("ms", ms.to_string().as_str())]);
                transcript = transcript.push(
                    text(stats)
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                );
            }
        }
        ChatPhase::Errored => {
            let message = chat.error.clone().unwrap_or_default();
            let error_block = container(
                text(format!("❌ {} {}", ctx.i18n.tr("chat-error-prefix"), message))
                    .size(typography::BODY)
                    .color(palette::ERROR_500),
            )
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(container_styles::accent_block(palette::ERROR_500));
            transcript = transcript.push(error_block);
        }
        ChatPhase::Idle | ChatPhase::Opening | ChatPhase::Streaming => {}
    }

    transcript.into()
}

fn build_input_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let busy = ctx.chat.is_active();

    let input = text_input(&ctx.i18n.tr("chat-placeholder"), ctx.question)
        .on_input(Message::QuestionChanged)
        .on_submit(Message::AskQuestion)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    let ask_label = if busy {
        ctx.i18n.tr("ask-button-busy")
    } else {
        ctx.i18n.tr("ask-button")
    };
    let mut ask_button = button(text(ask_label).size(typography::BODY))
        .padding(spacing::XS)
        .style(button_styles::primary);
    if !busy {
        ask_button = ask_button.on_press(Message::AskQuestion);
    }

    let clear_button = button(text(ctx.i18n.tr("clear-button")).size(typography::BODY))
        .padding(spacing::XS)
        .style(button_styles::secondary)
        .on_press(Message::ClearChat);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(ask_button)
        .push(clear_button)
        .into()
}
