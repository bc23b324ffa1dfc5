use crate::database::Sticker;

/// Numbers shown to a user about their own list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStats {
    pub stored: usize,
    pub total_uses: i64,
    pub most_used: Option<Sticker>,
    pub oldest: Option<Sticker>,
}

impl ListStats {
    pub fn from_stickers(stickers: &[Sticker]) -> Self {
        let most_used = stickers
            .iter()
            .filter(|sticker| sticker.use_count > 0)
            .max_by(|a, b| {
                a.use_count
                    .cmp(&b.use_count)
                    .then_with(|| a.last_used.cmp(&b.last_used))
            })
            .cloned();

        let oldest = stickers
            .iter()
            .min_by_key(|sticker| sticker.created_at)
            .cloned();

        ListStats {
            stored: stickers.len(),
            total_uses: stickers.iter().map(|sticker| sticker.use_count).sum(),
            most_used,
            oldest,
        }
    }
}
