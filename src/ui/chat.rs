use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use egui::{RichText, TextEdit, Ui};
use rand::seq::SliceRandom;

/// How long the canned assistant takes to "type" its reply.
const REPLY_DELAY: Duration = Duration::from_millis(1500);

pub struct ChatMessage {
    pub text: String,
    pub from_user: bool,
    pub sent_at: DateTime<Local>,
}

/// A small question box under the prediction result. Replies are canned and
/// delivered after a short delay; there is no backend behind it.
#[derive(Default)]
pub struct MiniChat {
    messages: Vec<ChatMessage>,
    input: String,
    pending_reply: Option<(Instant, String)>,
}

impl MiniChat {
    pub fn ui(&mut self, ui: &mut Ui, topic: &str) {
        if let Some((due, _)) = &self.pending_reply {
            if Instant::now() >= *due {
                if let Some((_, text)) = self.pending_reply.take() {
                    self.messages.push(ChatMessage {
                        text,
                        from_user: false,
                        sent_at: Local::now(),
                    });
                }
            } else {
                ui.ctx().request_repaint_after(Duration::from_millis(200));
            }
        }

        ui.group(|ui| {
            ui.label(RichText::new("Ask Questions About Your Prediction").size(16.0));
            ui.add_space(4.0);

            egui::ScrollArea::vertical()
                .max_height(180.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in &self.messages {
                        let who = if message.from_user { "You" } else { "Assistant" };
                        ui.label(
                            RichText::new(format!("{} · {}", who, message.sent_at.format("%H:%M")))
                                .small(),
                        );
                        ui.label(&message.text);
                        ui.add_space(4.0);
                    }
                    if self.pending_reply.is_some() {
                        ui.label(RichText::new("Assistant is typing...").weak());
                    }
                });

            ui.horizontal(|ui| {
                ui.add(
                    TextEdit::singleline(&mut self.input).hint_text("Ask about your prediction"),
                );
                let can_send = !self.input.trim().is_empty() && self.pending_reply.is_none();
                if ui.add_enabled(can_send, egui::Button::new("Send")).clicked() {
                    let text = std::mem::take(&mut self.input);
                    self.messages.push(ChatMessage {
                        text,
                        from_user: true,
                        sent_at: Local::now(),
                    });
                    self.pending_reply = Some((Instant::now() + REPLY_DELAY, canned_reply(topic)));
                }
            });
        });
    }
}

fn canned_reply(topic: &str) -> String {
    let topic = topic.split('.').next().unwrap_or(topic).to_lowercase();
    let templates = [
        "Based on the prediction about {topic}, here's what you should know: this is a general response. Please consult with a healthcare professional for personalized advice.",
        "Regarding {topic}: genetic predictions are a starting point, not a diagnosis. A specialist can order the confirmatory tests that apply to your case.",
        "About {topic}: keeping a record of symptoms and family history will make your consultation with a doctor much more productive.",
    ];
    let template = templates
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(templates[0]);
    template.replace("{topic}", &topic)
}
