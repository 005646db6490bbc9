//! Cultural trivia facts and the random picker behind the fact button.

#[cfg(test)]
#[path = "facts_test.rs"]
mod facts_test;

use rand::Rng;

use crate::modal::OpenModal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fact {
    pub title: &'static str,
    pub content: &'static str,
}

impl Fact {
    /// Dialog body: the content as a single escaped paragraph.
    #[must_use]
    pub fn body_html(&self) -> String {
        format!("<p>{}</p>", escape_html(self.content))
    }
}

pub const FACTS: [Fact; 5] = [
    Fact {
        title: "The Bayanihan Spirit",
        content: "The word 'bayanihan' comes from 'bayan', meaning town or community. It refers to the Filipino tradition of communal unity and mutual aid, where neighbors help move a community to a new location by carrying the entire village on their shoulders.",
    },
    Fact {
        title: "Multilingual Nation",
        content: "The Philippines has over 180 languages and dialects, making it one of the most linguistically diverse countries in the world. Filipino (based on Tagalog) and English are the official languages.",
    },
    Fact {
        title: "Kundiman Heritage",
        content: "Kundiman is a traditional Filipino love song characterized by a melodic style that reflects deep emotion and poetic lyrics. These songs often express themes of love, longing, and patriotism.",
    },
    Fact {
        title: "Filipino Cuisine Fusion",
        content: "Filipino food is a unique blend of Malay, Spanish, Chinese, and American influences, creating distinctive dishes like adobo, sinigang, and lechon that represent the country's multicultural heritage.",
    },
    Fact {
        title: "Island Geography",
        content: "With over 7,600 islands, the Philippines is the world's second-largest archipelago. Only Indonesia has more islands, making the Philippines home to incredible cultural and ecological diversity.",
    },
];

/// Uniform picker over [`FACTS`].
pub struct FactPicker<R> {
    rng: R,
}

impl<R: Rng> FactPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn pick_random(&mut self) -> &'static Fact {
        &FACTS[self.rng.random_range(0..FACTS.len())]
    }

    /// Pick a fact and show it in the shared dialog.
    pub fn present<M: OpenModal + ?Sized>(&mut self, modal: &mut M) -> &'static Fact {
        let fact = self.pick_random();
        modal.open_modal(fact.title, &fact.body_html());
        fact
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
