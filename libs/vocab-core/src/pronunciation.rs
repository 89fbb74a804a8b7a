//! Approximate IPA transcription.
//!
//! A static lexicon covers common learner words. Anything else goes through a
//! small set of spelling rewrites; the result is a rough hint, not a phonetic
//! transcription.

/// Cambridge-style transcriptions, keyed by lower-case word.
const LEXICON: &[(&str, &str)] = &[
    ("cat", "kæt"),
    ("dog", "dɒɡ"),
    ("run", "rʌn"),
    ("apple", "ˈæpəl"),
    ("fish", "fɪʃ"),
    ("blue", "bluː"),
    ("happy", "ˈhæpi"),
    ("bird", "bɜːd"),
    ("jump", "dʒʌmp"),
    ("play", "pleɪ"),
    ("book", "bʊk"),
    ("tree", "triː"),
    ("sun", "sʌn"),
    ("friend", "frend"),
    ("school", "skuːl"),
    ("house", "haʊs"),
    ("water", "ˈwɔːtər"),
    ("flower", "ˈflaʊər"),
    ("music", "ˈmjuːzɪk"),
    ("computer", "kəmˈpjuːtər"),
    ("beautiful", "ˈbjuːtɪfl"),
    ("chocolate", "ˈtʃɒklət"),
    ("elephant", "ˈelɪfənt"),
    ("guitar", "ɡɪˈtɑː"),
    ("holiday", "ˈhɒlədeɪ"),
    ("ice cream", "ˌaɪs ˈkriːm"),
    ("jungle", "ˈdʒʌŋɡl"),
    ("kitchen", "ˈkɪtʃɪn"),
    ("lemon", "ˈlemən"),
    ("mountain", "ˈmaʊntɪn"),
    ("notebook", "ˈnəʊtbʊk"),
    ("orange", "ˈɒrɪndʒ"),
    ("pencil", "ˈpensl"),
    ("queen", "kwiːn"),
    ("rabbit", "ˈræbɪt"),
    ("strawberry", "ˈstrɔːbəri"),
    ("teacher", "ˈtiːtʃər"),
    ("umbrella", "ʌmˈbrelə"),
    ("vegetable", "ˈvedʒtəbl"),
    ("window", "ˈwɪndəʊ"),
    ("yellow", "ˈjeləʊ"),
    ("zebra", "ˈzebrə"),
];

const ICONS: &[(&str, &str)] = &[
    ("cat", "🐱"),
    ("dog", "🐶"),
    ("fish", "🐟"),
    ("apple", "🍎"),
    ("tree", "🌳"),
    ("book", "📚"),
    ("sun", "☀️"),
    ("bird", "🐦"),
    ("friend", "👫"),
    ("school", "🏫"),
    ("happy", "😊"),
    ("blue", "🔵"),
    ("jump", "🤸"),
    ("run", "🏃"),
    ("play", "🎲"),
];

fn lookup(table: &'static [(&'static str, &'static str)], word: &str) -> Option<&'static str> {
    let key = word.to_lowercase();
    table
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, value)| *value)
}

/// Transcribe a word. Lexicon hits are returned bare; fallback output is
/// wrapped in slashes.
pub fn transcribe(word: &str) -> String {
    match lookup(LEXICON, word) {
        Some(ipa) => ipa.to_string(),
        None => fallback(word),
    }
}

/// Transcription wrapped in exactly one pair of slashes, for display.
pub fn display(word: &str) -> String {
    let ipa = transcribe(word);
    if ipa.starts_with('/') {
        ipa
    } else {
        format!("/{ipa}/")
    }
}

/// Emoji shown next to a handful of common words.
pub fn icon(word: &str) -> Option<&'static str> {
    lookup(ICONS, word)
}

fn fallback(word: &str) -> String {
    let mut w = word.to_lowercase();

    if let Some(stem) = w.strip_suffix("tion") {
        w = format!("{stem}ʃən");
    }
    w = w.replacen("ph", "f", 1).replacen("ough", "ɔː", 1);
    if let Some(rest) = w.strip_prefix('c') {
        let sound = if rest.starts_with(['e', 'i', 'y']) { "s" } else { "k" };
        w = format!("{sound}{rest}");
    }
    if let Some(stem) = w.strip_suffix('a') {
        w = format!("{stem}ə");
    }

    let spelled = w
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(".");
    format!("/{spelled}/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lexicon_lookup_ignores_case() {
        assert_eq!(transcribe("cat"), "kæt");
        assert_eq!(transcribe("Cat"), "kæt");
        assert_eq!(transcribe("ICE CREAM"), "ˌaɪs ˈkriːm");
    }

    #[test]
    fn lexicon_size() {
        assert_eq!(LEXICON.len(), 42);
    }

    #[test]
    fn fallback_spells_out_letters() {
        assert_eq!(transcribe("pig"), "/p.i.g/");
    }

    #[test]
    fn fallback_rewrites_tion_suffix() {
        assert_eq!(transcribe("Nation"), "/n.a.ʃ.ə.n/");
    }

    #[test]
    fn fallback_rewrites_ph_and_ough() {
        assert_eq!(transcribe("phone"), "/f.o.n.e/");
        assert_eq!(transcribe("tough"), "/t.ɔ.ː/");
    }

    #[test]
    fn fallback_soft_and_hard_c() {
        assert_eq!(transcribe("cell"), "/s.e.l.l/");
        assert_eq!(transcribe("cycle"), "/s.y.c.l.e/");
        assert_eq!(transcribe("cup"), "/k.u.p/");
    }

    #[test]
    fn fallback_trailing_a() {
        assert_eq!(transcribe("pizza"), "/p.i.z.z.ə/");
    }

    #[test]
    fn fallback_applies_rules_in_order() {
        // "tion" first, then the leading "c" before a non-front vowel.
        assert_eq!(transcribe("caption"), "/k.a.p.ʃ.ə.n/");
    }

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(transcribe("photograph"), transcribe("photograph"));
    }

    #[test]
    fn display_adds_slashes_once() {
        assert_eq!(display("dog"), "/dɒɡ/");
        assert_eq!(display("pig"), "/p.i.g/");
    }

    #[test]
    fn icons() {
        assert_eq!(icon("Dog"), Some("🐶"));
        assert_eq!(icon("zebra"), None);
    }
}
