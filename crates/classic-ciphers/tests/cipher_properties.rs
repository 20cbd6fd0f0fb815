//! Property tests across the cipher families.

use classic_ciphers::{
    atbash, beaufort, caesar_decode, caesar_encode, hill_decode, hill_encode, porta, rot13, rot47,
    Affine, Autokey, Bifid, Checkerboard, Columnar, DoubleTransposition, FourSquare, Fractionating,
    Gronsfeld, KeywordSubstitution, Nihilist, Playfair, Polybius, RailFence, Scytale, Trithemius,
    Vigenere,
};
use classic_core::Key;
use proptest::prelude::*;

fn letters() -> impl Strategy<Value = String> {
    "[A-Za-z]{0,64}"
}

fn upper_letters() -> impl Strategy<Value = String> {
    "[A-Z]{0,64}"
}

fn mixed_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?'-]{0,64}"
}

fn alpha_key() -> impl Strategy<Value = Key> {
    "[A-Za-z]{1,12}".prop_map(|raw| Key::alpha(&raw, "KEY"))
}

/// Fractionating ciphers pad a lone symbol with `X`.
fn lone_padded(text: &str) -> String {
    if text.len() == 1 {
        format!("{text}X")
    } else {
        text.to_owned()
    }
}

/// Positions of non-letters must survive substitution.
fn non_letters(text: &str) -> Vec<(usize, char)> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_ascii_alphabetic())
        .collect()
}

proptest! {
    #[test]
    fn caesar_round_trip(text in mixed_text(), shift in -100i64..100) {
        let ct = caesar_encode(&text, shift);
        prop_assert_eq!(non_letters(&ct), non_letters(&text));
        prop_assert_eq!(caesar_decode(&ct, shift), text);
    }

    #[test]
    fn self_inverse_ciphers(text in mixed_text(), key in alpha_key()) {
        prop_assert_eq!(rot13(&rot13(&text)), text.clone());
        prop_assert_eq!(rot47(&rot47(&text)), text.clone());
        prop_assert_eq!(atbash(&atbash(&text)), text.clone());
        prop_assert_eq!(beaufort(&beaufort(&text, &key), &key), text.clone());
        prop_assert_eq!(porta(&porta(&text, &key), &key), text);
    }

    #[test]
    fn affine_round_trip(text in mixed_text(), a in prop::sample::select(vec![1i64, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]), b in -50i64..50) {
        let cipher = Affine::new(a, b).expect("unit multiplier");
        prop_assert_eq!(cipher.decode(&cipher.encode(&text)), text);
    }

    #[test]
    fn keyed_substitution_round_trips(text in mixed_text(), key in alpha_key()) {
        let keyword = KeywordSubstitution::new(&key);
        prop_assert_eq!(keyword.decode(&keyword.encode(&text)), text.clone());

        let vigenere = Vigenere::new(&key);
        let ct = vigenere.encode(&text);
        prop_assert_eq!(non_letters(&ct), non_letters(&text));
        prop_assert_eq!(vigenere.decode(&ct), text.clone());

        let autokey = Autokey::new(&key);
        prop_assert_eq!(autokey.decode(&autokey.encode(&text)), text.clone());

        let trithemius = Trithemius::new(key.len() as i64);
        prop_assert_eq!(trithemius.decode(&trithemius.encode(&text)), text);
    }

    #[test]
    fn gronsfeld_round_trip(text in mixed_text(), digits in "[0-9]{1,8}") {
        let cipher = Gronsfeld::new(&Key::digits(&digits, "31415"));
        prop_assert_eq!(cipher.decode(&cipher.encode(&text)), text);
    }

    #[test]
    fn square_ciphers_round_trip(text in upper_letters(), key in alpha_key()) {
        let folded = text.replace('J', "I");

        let bifid = Bifid::new(key.as_str(), 0);
        prop_assert_eq!(bifid.decode(&bifid.encode(&text)), folded.clone());

        let polybius = Polybius::new(key.as_str());
        prop_assert_eq!(polybius.decode(&polybius.encode(&text)).expect("valid"), folded.clone());

        let nihilist = Nihilist::new(key.as_str(), "RUSSIAN");
        prop_assert_eq!(nihilist.decode(&nihilist.encode(&text)).expect("valid"), folded.clone());

        let adfgx = Fractionating::adfgx(key.as_str(), &key);
        prop_assert_eq!(adfgx.decode(&adfgx.encode(&text)).expect("valid"), lone_padded(&folded));

        let adfgvx = Fractionating::adfgvx(key.as_str(), &key);
        prop_assert_eq!(adfgvx.decode(&adfgvx.encode(&text)).expect("valid"), lone_padded(&text));

        let board = Checkerboard::new(&key, [2, 6]).expect("distinct escapes");
        prop_assert_eq!(board.decode(&board.encode(&text)).expect("valid"), text);
    }

    #[test]
    fn digraph_ciphers_round_trip_even_text(pairs in "([A-Z][A-Z]){0,32}", key in alpha_key()) {
        let folded = pairs.replace('J', "I");
        let four = FourSquare::new(key.as_str(), "KEYWORD");
        prop_assert_eq!(four.decode(&four.encode(&pairs)).expect("even"), folded.clone());

        let hill = hill_encode(&pairs);
        prop_assert_eq!(hill_decode(&hill).expect("even"), pairs);

        // Without doubled pairs Playfair adds no fillers.
        let distinct: Vec<char> = folded
            .as_bytes()
            .chunks(2)
            .filter(|p| p[0] != p[1])
            .flat_map(|p| [p[0] as char, p[1] as char])
            .collect();
        let distinct: String = distinct.into_iter().collect();
        let playfair = Playfair::new(key.as_str());
        prop_assert_eq!(playfair.decode(&playfair.encode(&distinct)).expect("even"), distinct);
    }

    #[test]
    fn transpositions_round_trip(text in letters(), key in alpha_key(), key2 in alpha_key(), n in 1usize..12) {
        let rails = RailFence::new(n).expect("rails");
        prop_assert_eq!(rails.decode(&rails.encode(&text)), text.clone());

        let columnar = Columnar::new(&key);
        prop_assert_eq!(columnar.decode(&columnar.encode(&text)), text.clone());

        let double = DoubleTransposition::new(&key, &key2);
        prop_assert_eq!(double.decode(&double.encode(&text)), text.clone());

        let scytale = Scytale::new(n).expect("diameter");
        prop_assert_eq!(scytale.decode(&scytale.encode(&text)), text);
    }

    #[test]
    fn transpositions_permute_letters(text in letters(), key in alpha_key()) {
        let mut before: Vec<char> = text.chars().collect();
        let mut after: Vec<char> = Columnar::new(&key).encode(&text).chars().collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }
}
