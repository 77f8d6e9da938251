// Static language data for Indonesian retail survey comments.
// Everything here is immutable for the process lifetime; word sets are
// Lazy<HashSet> so membership checks stay O(1) in the hot tokenize path.
use once_cell::sync::Lazy;
use std::collections::HashSet;

// Stopwords, including the informal/slang variants that show up constantly in
// survey free text (banget, sih, udah, ...). Negation words are deliberately
// NOT stopwords: they survive tokenization as classifier features and are only
// filtered out again by the aggregator's word-cloud view.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "yang", "dan", "dari", "ini", "itu", "dengan", "untuk", "pada",
        "adalah", "ada", "atau", "juga", "akan", "sudah", "telah", "saya",
        "aku", "kami", "kita", "anda", "kamu", "dia", "mereka", "beliau",
        "karena", "karna", "sebab", "soalnya", "sebagai", "oleh", "saat",
        "ketika", "waktu", "sehingga", "agar", "supaya", "dalam", "luar",
        "atas", "bawah", "antara", "setelah", "sebelum", "sesudah", "sejak",
        "hingga", "sampai", "bagi", "tentang", "terhadap", "seperti",
        "yaitu", "yakni", "ialah", "bahwa", "hanya", "cuma", "lagi", "masih",
        "pernah", "sedang", "bisa", "dapat", "boleh", "harus", "mau",
        "ingin", "pengen", "tersebut", "begitu", "begini", "maka", "jadi",
        "kalau", "kalo", "jika", "bila", "apabila", "serta", "para", "nya",
        "pun", "lah", "kah", "saja", "aja", "doang", "sangat", "amat",
        "paling", "lebih", "cukup", "banget", "bgt", "sih", "deh", "dong",
        "nih", "tuh", "kok", "kan", "gitu", "gini", "udah", "udh", "dah",
        "biar", "buat", "sama", "semua", "setiap", "tiap", "beberapa",
        "banyak", "sedikit", "sekali", "terlalu", "lalu", "kemudian",
        "terus", "trus", "sini", "situ", "sana", "mana", "dimana",
        "bagaimana", "gimana", "kenapa", "mengapa", "apakah", "apa",
        "siapa", "kapan", "berapa", "pas", "kayak", "kayaknya",
        "sepertinya", "mungkin", "memang", "emang", "malah", "justru",
        "bahkan", "apalagi", "hal", "orang", "bapak", "ibu", "mas", "mbak",
        "pak", "bu", "pokoknya", "intinya", "btw", "krn", "utk", "dgn",
        "tsb", "dll", "dsb", "spt", "klo", "kpd", "misal", "misalnya",
        "contohnya", "sempat", "lantas",
    ]
    .iter()
    .copied()
    .collect()
});

// Negation words (incl. slang spellings). Kept out of the stopword set on
// purpose; see above. Token-level scoring does not invert on these — negation
// is expressed through the multi-word phrase lists instead.
pub static NEGATION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "tidak", "tak", "tdk", "gak", "nggak", "enggak", "engga", "bukan",
        "belum", "belom", "jangan", "tanpa",
    ]
    .iter()
    .copied()
    .collect()
});

// Contrast conjunctions. Declared for future negation-scope handling; the
// current scoring pipeline relies on phrase matches only.
pub static CONTRAST_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "tapi", "tetapi", "namun", "padahal", "sayangnya", "meski",
        "meskipun", "walau", "walaupun", "sedangkan", "melainkan",
    ]
    .iter()
    .copied()
    .collect()
});

// Suggestion/imperative markers ("sebaiknya ditambah kasir"). Declared for the
// same future use as CONTRAST_WORDS; not consulted by scoring today.
pub static SUGGESTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "sebaiknya", "seharusnya", "semestinya", "mohon", "tolong", "harap",
        "semoga", "saran", "masukan", "usul", "perlu", "ditambah",
        "diperbaiki", "ditingkatkan", "diperbanyak",
    ]
    .iter()
    .copied()
    .collect()
});

// Positive single-word polarity lexicon.
pub static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bagus", "baik", "ramah", "sopan", "santun", "cepat", "sigap",
        "tanggap", "responsif", "cekatan", "gesit", "telaten", "bersih",
        "rapi", "wangi", "harum", "sejuk", "adem", "nyaman", "betah",
        "puas", "memuaskan", "senang", "suka", "bangga", "mantap",
        "mantab", "keren", "kece", "apik", "ciamik", "oke", "okay", "sip",
        "top", "juara", "istimewa", "sempurna", "terbaik", "unggul",
        "memukau", "menyenangkan", "mengesankan", "menarik", "murah",
        "hemat", "terjangkau", "ekonomis", "lengkap", "berkualitas",
        "segar", "jelas", "informatif", "membantu", "mudah", "praktis",
        "efisien", "lancar", "aman", "amanah", "jujur", "profesional",
        "peduli", "perhatian", "solutif", "rekomendasi", "recommended",
        "favorit", "lumayan", "asik", "asyik", "seru", "strategis", "luas",
        "terang", "gercep", "mantul",
    ]
    .iter()
    .copied()
    .collect()
});

// Negative single-word polarity lexicon.
pub static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "buruk", "jelek", "parah", "payah", "kecewa", "mengecewakan",
        "kesal", "sebal", "sebel", "marah", "emosi", "lambat", "lama",
        "lemot", "lelet", "telat", "terlambat", "kotor", "jorok", "kumuh",
        "berdebu", "lengket", "bau", "apek", "amis", "pesing", "panas",
        "gerah", "pengap", "sumpek", "berantakan", "kacau", "semrawut",
        "sempit", "gelap", "berisik", "bising", "penuh", "sesak", "mahal",
        "kemahalan", "kosong", "habis", "langka", "rusak", "cacat",
        "pecah", "bocor", "mati", "error", "eror", "gagal", "macet",
        "susah", "sulit", "ribet", "repot", "rumit", "basi", "kadaluarsa",
        "expired", "layu", "busuk", "cuek", "jutek", "judes", "galak",
        "kasar", "ketus", "sombong", "angkuh", "malas", "hilang", "salah",
        "keliru", "bohong", "menipu", "percuma", "rugi", "zonk", "kurang",
    ]
    .iter()
    .copied()
    .collect()
});

// Multi-word phrase overrides, matched as substrings of the lowercased raw
// text (so stopword filtering never breaks them apart). A positive hit forces
// the positive label; a negative hit forces negative and is scanned last.
pub static POSITIVE_PHRASES: &[&str] = &[
    "sangat memuaskan",
    "sangat puas",
    "puas sekali",
    "sangat ramah",
    "ramah sekali",
    "sangat membantu",
    "sangat baik",
    "sangat bagus",
    "bagus sekali",
    "sangat nyaman",
    "sangat bersih",
    "pelayanan bagus",
    "pelayanan baik",
    "pelayanan memuaskan",
    "cukup puas",
    "luar biasa",
    "good job",
    "mantap sekali",
    "tidak mengecewakan",
];

pub static NEGATIVE_PHRASES: &[&str] = &[
    "tidak ramah",
    "kurang ramah",
    "tidak sopan",
    "tidak puas",
    "kurang puas",
    "tidak memuaskan",
    "kurang memuaskan",
    "tidak bersih",
    "kurang bersih",
    "tidak nyaman",
    "kurang nyaman",
    "tidak lengkap",
    "kurang lengkap",
    "tidak membantu",
    "tidak dilayani",
    "sangat lambat",
    "sangat lama",
    "lama sekali",
    "terlalu lama",
    "sangat panas",
    "sangat kecewa",
    "sangat mengecewakan",
    "tidak sesuai",
];

// Compliance keywords for the membership-offer check. Matched token-exact so
// that "memberikan" does not trip the rule.
pub static COMPLIANCE_TOKENS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["member", "membership", "keanggotaan"].iter().copied().collect()
});

// Theme keyword map. Keywords match as substrings of tokens, so "layan"
// covers pelayanan/melayani/dilayani, "bantu" covers membantu/dibantu, etc.
pub const THEMES: &[(&str, &[&str])] = &[
    (
        "Service",
        &[
            "layan", "ramah", "staf", "kasir", "karyawan", "pegawai",
            "sopan", "bantu", "senyum", "sapa",
        ],
    ),
    (
        "Product",
        &[
            "produk", "barang", "stok", "harga", "kualitas", "kemasan",
            "varian", "diskon", "promo",
        ],
    ),
    (
        "Ambience",
        &[
            "toko", "bersih", "kotor", "panas", "udara", "suasana",
            "pencahayaan", "rapi", "bau", "sejuk", "parkir",
        ],
    ),
    (
        "Process",
        &[
            "antri", "antre", "lambat", "cepat", "proses", "transaksi",
            "pembayaran", "struk", "refund", "komplain",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_words_are_not_stopwords() {
        for word in NEGATION_WORDS.iter() {
            assert!(
                !STOPWORDS.contains(word),
                "negation word '{}' must stay out of the stopword set",
                word
            );
        }
    }

    #[test]
    fn polarity_lexicons_are_disjoint() {
        for word in POSITIVE_WORDS.iter() {
            assert!(!NEGATIVE_WORDS.contains(word), "'{}' in both lexicons", word);
        }
    }

    #[test]
    fn phrases_are_lowercase_multiword() {
        for phrase in POSITIVE_PHRASES.iter().chain(NEGATIVE_PHRASES.iter()) {
            assert_eq!(*phrase, phrase.to_lowercase());
            assert!(phrase.contains(' '), "'{}' is not a multi-word phrase", phrase);
        }
    }

    #[test]
    fn theme_map_has_four_themes() {
        let names: Vec<&str> = THEMES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Service", "Product", "Ambience", "Process"]);
    }
}
