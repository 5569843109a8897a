use crate::models::format::{FormatId, GameVariant, LanguageId};

/// Current format/game/language choice, as suggested by detection or set by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// `None` until an extension has been recognised or the user picked one.
    pub input_format: Option<FormatId>,
    pub game: GameVariant,
    pub language: LanguageId,
}

impl Selection {
    /// Replaces every suggested field with the explicit choice, when one was made.
    pub fn overridden_by(
        self,
        input_format: Option<FormatId>,
        game: Option<GameVariant>,
        language: Option<LanguageId>,
    ) -> Selection {
        Selection {
            input_format: input_format.or(self.input_format),
            game: game.unwrap_or(self.game),
            language: language.unwrap_or(self.language),
        }
    }
}
