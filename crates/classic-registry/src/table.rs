//! Static cipher table and the adapters binding schemas to cipher constructors.

use classic_ciphers::{
    atbash, beaufort, caesar_decode, caesar_encode, hill_decode, hill_encode, porta, rot13, rot47,
    Affine, Autokey, Bifid, Checkerboard, Columnar, DoubleTransposition, FourSquare, Fractionating,
    Gronsfeld, Homophonic, KeywordSubstitution, Nihilist, Playfair, Polybius, RailFence,
    RunningKey, Scytale, TapCode, Trithemius, Vigenere,
};
use classic_core::{CipherError, Key, KeyKind};
use rand::RngCore;

use crate::cipher_id::{CipherId, Family};
use crate::descriptor::{CipherSpec, ParamSpec, Resolved};

/// Default running-key passage.
pub const RUNNING_KEY_PASSAGE: &str = "It was the best of times, it was the worst of times, \
it was the age of wisdom, it was the age of foolishness, it was the epoch of belief, \
it was the epoch of incredulity, it was the season of Light, it was the season of Darkness";

type Out = Result<String, CipherError>;

const NO_PARAMS: &[ParamSpec] = &[];
const SINGLE_KEY: &[ParamSpec] = &[ParamSpec::text("keyword", "KEY", "alphabetic key")];
const CAESAR: &[ParamSpec] = &[ParamSpec::int("shift", 3, "alphabet shift, may be negative")];
const AFFINE: &[ParamSpec] = &[
    ParamSpec::int("a", 5, "multiplier, coprime with 26"),
    ParamSpec::int("b", 8, "additive shift"),
];
const KEYWORD: &[ParamSpec] = &[ParamSpec::text("keyword", "KEYWORD", "keyed alphabet prefix")];
const GRONSFELD: &[ParamSpec] = &[ParamSpec::text("keyword", "31415", "digit key")];
const TRITHEMIUS: &[ParamSpec] = &[ParamSpec::int("offset", 0, "shift of the first letter")];
const RUNNING_KEY: &[ParamSpec] = &[
    ParamSpec::text("passage", RUNNING_KEY_PASSAGE, "key stream text"),
];
const PLAYFAIR: &[ParamSpec] = &[ParamSpec::text("keyword", "KEYWORD", "square keyword")];
const FOUR_SQUARE: &[ParamSpec] = &[
    ParamSpec::text("key1", "EXAMPLE", "top-right square keyword"),
    ParamSpec::text("key2", "KEYWORD", "bottom-left square keyword"),
];
const BIFID: &[ParamSpec] = &[
    ParamSpec::text("keyword", "KEY", "square keyword"),
    ParamSpec::int("period", 0, "block length, 0 for the whole message"),
];
const POLYBIUS: &[ParamSpec] = &[ParamSpec::text("keyword", "", "optional square keyword")];
const NIHILIST: &[ParamSpec] = &[
    ParamSpec::text("keyword", "ZEBRAS", "square keyword"),
    ParamSpec::text("key", "RUSSIAN", "additive key"),
];
const CHECKERBOARD: &[ParamSpec] = &[
    ParamSpec::text("keyword", "ASINTOER", "board keyword"),
    ParamSpec::int("escape1", 2, "first escape digit"),
    ParamSpec::int("escape2", 6, "second escape digit"),
];
const HOMOPHONIC: &[ParamSpec] = &[
    ParamSpec::text("keyword", "HOMOPHONIC", "code assignment order"),
    ParamSpec::optional_int("seed", "RNG seed for reproducible output"),
];
const RAIL_FENCE: &[ParamSpec] = &[ParamSpec::int("rails", 3, "number of rails, at least 1")];
const COLUMNAR: &[ParamSpec] = &[ParamSpec::text("keyword", "ZEBRAS", "column order key")];
const DOUBLE_TRANSPOSITION: &[ParamSpec] = &[
    ParamSpec::text("key1", "ZEBRAS", "first pass key"),
    ParamSpec::text("key2", "STRIPE", "second pass key"),
];
const SCYTALE: &[ParamSpec] = &[ParamSpec::int("diameter", 4, "letters per turn, at least 1")];
const FRACTIONATION: &[ParamSpec] = &[
    ParamSpec::text("square", "SECRET", "square keyword"),
    ParamSpec::text("keyword", "PRIVACY", "transposition key"),
];

fn entry(
    id: CipherId,
    name: &'static str,
    family: Family,
    params: &'static [ParamSpec],
    encode: fn(&str, &Resolved<'_>, &mut dyn RngCore) -> Out,
    decode: fn(&str, &Resolved<'_>) -> Out,
) -> CipherSpec {
    CipherSpec {
        id,
        name,
        family,
        params,
        randomized: false,
        encode,
        decode,
    }
}

/// Every cipher, in [`CipherId::ALL`] order.
pub(crate) static CIPHERS: std::sync::LazyLock<[CipherSpec; 28]> =
    std::sync::LazyLock::new(build);

fn build() -> [CipherSpec; 28] {
    use CipherId as Id;
    use Family::*;

    [
        entry(
            Id::Caesar,
            "Caesar",
            Monoalphabetic,
            CAESAR,
            |t, p, _| Ok(caesar_encode(t, p.int("shift")?)),
            |t, p| Ok(caesar_decode(t, p.int("shift")?)),
        ),
        entry(
            Id::Rot13,
            "ROT13",
            Monoalphabetic,
            NO_PARAMS,
            |t, _, _| Ok(rot13(t)),
            |t, _| Ok(rot13(t)),
        ),
        entry(
            Id::Rot47,
            "ROT47",
            Monoalphabetic,
            NO_PARAMS,
            |t, _, _| Ok(rot47(t)),
            |t, _| Ok(rot47(t)),
        ),
        entry(
            Id::Atbash,
            "Atbash",
            Monoalphabetic,
            NO_PARAMS,
            |t, _, _| Ok(atbash(t)),
            |t, _| Ok(atbash(t)),
        ),
        entry(
            Id::Affine,
            "Affine",
            Monoalphabetic,
            AFFINE,
            |t, p, _| Ok(affine(p)?.encode(t)),
            |t, p| Ok(affine(p)?.decode(t)),
        ),
        entry(
            Id::Keyword,
            "Keyword substitution",
            Monoalphabetic,
            KEYWORD,
            |t, p, _| Ok(KeywordSubstitution::new(&alpha(p, "keyword")?).encode(t)),
            |t, p| Ok(KeywordSubstitution::new(&alpha(p, "keyword")?).decode(t)),
        ),
        entry(
            Id::Vigenere,
            "Vigenère",
            Polyalphabetic,
            SINGLE_KEY,
            |t, p, _| Ok(Vigenere::new(&alpha(p, "keyword")?).encode(t)),
            |t, p| Ok(Vigenere::new(&alpha(p, "keyword")?).decode(t)),
        ),
        entry(
            Id::Beaufort,
            "Beaufort",
            Polyalphabetic,
            SINGLE_KEY,
            |t, p, _| Ok(beaufort(t, &alpha(p, "keyword")?)),
            |t, p| Ok(beaufort(t, &alpha(p, "keyword")?)),
        ),
        entry(
            Id::Autokey,
            "Autokey",
            Polyalphabetic,
            SINGLE_KEY,
            |t, p, _| Ok(Autokey::new(&alpha(p, "keyword")?).encode(t)),
            |t, p| Ok(Autokey::new(&alpha(p, "keyword")?).decode(t)),
        ),
        entry(
            Id::Gronsfeld,
            "Gronsfeld",
            Polyalphabetic,
            GRONSFELD,
            |t, p, _| Ok(Gronsfeld::new(&p.key("keyword", KeyKind::Digit)?).encode(t)),
            |t, p| Ok(Gronsfeld::new(&p.key("keyword", KeyKind::Digit)?).decode(t)),
        ),
        entry(
            Id::Porta,
            "Porta",
            Polyalphabetic,
            SINGLE_KEY,
            |t, p, _| Ok(porta(t, &alpha(p, "keyword")?)),
            |t, p| Ok(porta(t, &alpha(p, "keyword")?)),
        ),
        entry(
            Id::Trithemius,
            "Trithemius",
            Polyalphabetic,
            TRITHEMIUS,
            |t, p, _| Ok(Trithemius::new(p.int("offset")?).encode(t)),
            |t, p| Ok(Trithemius::new(p.int("offset")?).decode(t)),
        ),
        entry(
            Id::RunningKey,
            "Running key",
            Polyalphabetic,
            RUNNING_KEY,
            |t, p, _| Ok(RunningKey::new(&alpha(p, "passage")?).encode(t)),
            |t, p| Ok(RunningKey::new(&alpha(p, "passage")?).decode(t)),
        ),
        entry(
            Id::Playfair,
            "Playfair",
            Square,
            PLAYFAIR,
            |t, p, _| Ok(Playfair::new(alpha(p, "keyword")?.as_str()).encode(t)),
            |t, p| Playfair::new(alpha(p, "keyword")?.as_str()).decode(t),
        ),
        entry(
            Id::FourSquare,
            "Four-square",
            Square,
            FOUR_SQUARE,
            |t, p, _| Ok(four_square(p)?.encode(t)),
            |t, p| four_square(p)?.decode(t),
        ),
        entry(
            Id::Bifid,
            "Bifid",
            Square,
            BIFID,
            |t, p, _| Ok(Bifid::new(alpha(p, "keyword")?.as_str(), p.usize("period")?).encode(t)),
            |t, p| Ok(Bifid::new(alpha(p, "keyword")?.as_str(), p.usize("period")?).decode(t)),
        ),
        entry(
            Id::Polybius,
            "Polybius",
            Square,
            POLYBIUS,
            |t, p, _| Ok(Polybius::new(&p.text("keyword")?).encode(t)),
            |t, p| Polybius::new(&p.text("keyword")?).decode(t),
        ),
        entry(
            Id::Nihilist,
            "Nihilist",
            Square,
            NIHILIST,
            |t, p, _| Ok(nihilist(p)?.encode(t)),
            |t, p| nihilist(p)?.decode(t),
        ),
        entry(
            Id::TapCode,
            "Tap code",
            Square,
            NO_PARAMS,
            |t, _, _| Ok(TapCode::new().encode(t)),
            |t, _| TapCode::new().decode(t),
        ),
        entry(
            Id::Checkerboard,
            "Straddling checkerboard",
            Square,
            CHECKERBOARD,
            |t, p, _| Ok(checkerboard(p)?.encode(t)),
            |t, p| checkerboard(p)?.decode(t),
        ),
        CipherSpec {
            randomized: true,
            ..entry(
                Id::Homophonic,
                "Homophonic",
                Monoalphabetic,
                HOMOPHONIC,
                |t, p, rng| {
                    Ok(Homophonic::new(&alpha(p, "keyword")?).encode(t, rng))
                },
                |t, p| Homophonic::new(&alpha(p, "keyword")?).decode(t),
            )
        },
        entry(
            Id::RailFence,
            "Rail fence",
            Transposition,
            RAIL_FENCE,
            |t, p, _| Ok(RailFence::new(p.usize("rails")?)?.encode(t)),
            |t, p| Ok(RailFence::new(p.usize("rails")?)?.decode(t)),
        ),
        entry(
            Id::Columnar,
            "Columnar",
            Transposition,
            COLUMNAR,
            |t, p, _| Ok(Columnar::new(&alpha(p, "keyword")?).encode(t)),
            |t, p| Ok(Columnar::new(&alpha(p, "keyword")?).decode(t)),
        ),
        entry(
            Id::DoubleTransposition,
            "Double transposition",
            Transposition,
            DOUBLE_TRANSPOSITION,
            |t, p, _| Ok(double(p)?.encode(t)),
            |t, p| Ok(double(p)?.decode(t)),
        ),
        entry(
            Id::Scytale,
            "Scytale",
            Transposition,
            SCYTALE,
            |t, p, _| Ok(Scytale::new(p.usize("diameter")?)?.encode(t)),
            |t, p| Ok(Scytale::new(p.usize("diameter")?)?.decode(t)),
        ),
        entry(
            Id::Adfgvx,
            "ADFGVX",
            Square,
            FRACTIONATION,
            |t, p, _| Ok(adfgvx(p)?.encode(t)),
            |t, p| adfgvx(p)?.decode(t),
        ),
        entry(
            Id::Adfgx,
            "ADFGX",
            Square,
            FRACTIONATION,
            |t, p, _| Ok(adfgx(p)?.encode(t)),
            |t, p| adfgx(p)?.decode(t),
        ),
        entry(
            Id::Hill,
            "Hill 2×2",
            Matrix,
            NO_PARAMS,
            |t, _, _| Ok(hill_encode(t)),
            |t, _| hill_decode(t),
        ),
    ]
}

fn affine(p: &Resolved<'_>) -> Result<Affine, CipherError> {
    Affine::new(p.int("a")?, p.int("b")?)
}

fn checkerboard(p: &Resolved<'_>) -> Result<Checkerboard, CipherError> {
    let digit = |name: &str| -> Result<u8, CipherError> {
        let value = p.int(name)?;
        u8::try_from(value)
            .map_err(|_| CipherError::invalid_parameter(name, format!("{value} is not a digit")))
    };
    Checkerboard::new(&alpha(p, "keyword")?, [digit("escape1")?, digit("escape2")?])
}

fn double(p: &Resolved<'_>) -> Result<DoubleTransposition, CipherError> {
    Ok(DoubleTransposition::new(&alpha(p, "key1")?, &alpha(p, "key2")?))
}

fn alpha(p: &Resolved<'_>, name: &str) -> Result<Key, CipherError> {
    p.key(name, KeyKind::Alpha)
}

fn four_square(p: &Resolved<'_>) -> Result<FourSquare, CipherError> {
    Ok(FourSquare::new(alpha(p, "key1")?.as_str(), alpha(p, "key2")?.as_str()))
}

fn nihilist(p: &Resolved<'_>) -> Result<Nihilist, CipherError> {
    Ok(Nihilist::new(alpha(p, "keyword")?.as_str(), alpha(p, "key")?.as_str()))
}

fn adfgvx(p: &Resolved<'_>) -> Result<Fractionating, CipherError> {
    let square = p.key("square", KeyKind::AlphaNumeric)?;
    Ok(Fractionating::adfgvx(square.as_str(), &alpha(p, "keyword")?))
}

fn adfgx(p: &Resolved<'_>) -> Result<Fractionating, CipherError> {
    Ok(Fractionating::adfgx(alpha(p, "square")?.as_str(), &alpha(p, "keyword")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ParamDefault;

    #[test]
    fn table_follows_id_order() {
        for (spec, id) in CIPHERS.iter().zip(CipherId::ALL) {
            assert_eq!(spec.id, id);
        }
    }

    #[test]
    fn schema_names_are_unique() {
        for spec in CIPHERS.iter() {
            let mut names: Vec<_> = spec.params.iter().map(|p| p.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), spec.params.len(), "{}", spec.id);
        }
    }

    #[test]
    fn schemas_carry_their_defaults() {
        let default = |id: CipherId, name: &str| {
            CIPHERS[id.index()].param(name).map(|p| p.default)
        };
        assert_eq!(default(CipherId::Caesar, "shift"), Some(ParamDefault::Int(3)));
        assert_eq!(default(CipherId::Affine, "b"), Some(ParamDefault::Int(8)));
        assert_eq!(default(CipherId::Scytale, "diameter"), Some(ParamDefault::Int(4)));
        assert_eq!(
            default(CipherId::RunningKey, "passage"),
            Some(ParamDefault::Text(RUNNING_KEY_PASSAGE))
        );
        assert_eq!(default(CipherId::Homophonic, "seed"), Some(ParamDefault::None));
        assert_eq!(default(CipherId::Adfgx, "square"), Some(ParamDefault::Text("SECRET")));
        assert_eq!(CIPHERS[CipherId::Hill.index()].params, NO_PARAMS);
    }

    #[test]
    fn only_homophonic_is_randomized() {
        let randomized: Vec<_> = CIPHERS.iter().filter(|s| s.randomized).map(|s| s.id).collect();
        assert_eq!(randomized, vec![CipherId::Homophonic]);
    }
}
