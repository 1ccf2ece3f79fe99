use serde::Serialize;

/// A dhikr formula shown by the tasbih counter. The counter rotates through
/// these as the tally crosses cycle boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Formula {
    pub arabic: &'static str,
    pub latin: &'static str,
    pub meaning: &'static str,
    pub recommendation: &'static str,
}

/// A Quran verse for the verse-of-the-day card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub arabic: &'static str,
    pub translation: &'static str,
    pub reference: &'static str,
    pub topic: &'static str,
    pub reflection: &'static str,
}

/// One of the Names of God, tagged with a category for the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameEntry {
    pub arabic: &'static str,
    pub latin: &'static str,
    pub meaning: &'static str,
    pub category: &'static str,
}

pub const FORMULAS: &[Formula] = &[
    Formula {
        arabic: "سُبْحَانَ الله",
        latin: "Subhanallah",
        meaning: "Gloria a Alá",
        recommendation: "33 veces",
    },
    Formula {
        arabic: "الْحَمْدُ لِله",
        latin: "Alhamdulillah",
        meaning: "Alabado sea Alá",
        recommendation: "33 veces",
    },
    Formula {
        arabic: "اللهُ أَكْبَر",
        latin: "Allahu Akbar",
        meaning: "Alá es el más grande",
        recommendation: "33 veces",
    },
    Formula {
        arabic: "لا إله إلا الله",
        latin: "La ilaha illallah",
        meaning: "No hay más dios que Alá",
        recommendation: "1 vez (completa 100)",
    },
];

pub const VERSES: &[Verse] = &[
    Verse {
        arabic: "وَإِذَا سَأَلَكَ عِبَادِي عَنِّي فَإِنِّي قَرِيبٌۖ أُجِيبُ دَعۡوَةَ ٱلدَّاعِ إِذَا دَعَانِۖ",
        translation: "Y cuando Mis siervos te pregunten por Mí, (diles que) ciertamente estoy cerca. Respondo la súplica de quien Me invoca cuando Me invoca.",
        reference: "Corán 2:186",
        topic: "Cercanía de Dios",
        reflection: "Dios está más cerca de nosotros que nuestra vena yugular. Nunca estamos solos en nuestras súplicas.",
    },
    Verse {
        arabic: "إِنَّ مَعَ ٱلۡعُسۡرِ يُسۡرٗا",
        translation: "Ciertamente, con la dificultad viene la facilidad.",
        reference: "Corán 94:6",
        topic: "Esperanza",
        reflection: "Después de cada dificultad, Dios promete alivio. Esta es una ley divina que nos da esperanza en los momentos más oscuros.",
    },
    Verse {
        arabic: "وَٱلَّذِينَ جَٰهَدُواْ فِينَا لَنَهۡدِيَنَّهُمۡ سُبُلَنَاۚ وَإِنَّ ٱللَّهَ لَمَعَ ٱلۡمُحۡسِنِينَ",
        translation: "Y a quienes se esfuerzan por Nuestra causa, ciertamente les guiaremos por Nuestros caminos. En verdad, Alá está con los que hacen el bien.",
        reference: "Corán 29:69",
        topic: "Esfuerzo y Guía",
        reflection: "El esfuerzo sincero (jihad an-nafs) es la llave que abre las puertas de la guía divina.",
    },
];

pub const NAMES: &[NameEntry] = &[
    NameEntry {
        arabic: "الرَّحْمَنُ",
        latin: "Ar-Rahman",
        meaning: "El Compasivo",
        category: "misericordia",
    },
    NameEntry {
        arabic: "الرَّحِيمُ",
        latin: "Ar-Rahim",
        meaning: "El Misericordioso",
        category: "misericordia",
    },
    NameEntry {
        arabic: "الْمَلِكُ",
        latin: "Al-Malik",
        meaning: "El Rey Soberano",
        category: "poder",
    },
    NameEntry {
        arabic: "الْقُدُّوسُ",
        latin: "Al-Quddus",
        meaning: "El Purísimo",
        category: "paz",
    },
    NameEntry {
        arabic: "السَّلَامُ",
        latin: "As-Salam",
        meaning: "La Fuente de Paz",
        category: "paz",
    },
    NameEntry {
        arabic: "الْمُؤْمِنُ",
        latin: "Al-Mu'min",
        meaning: "El Dador de Fe",
        category: "paz",
    },
    NameEntry {
        arabic: "الْعَزِيزُ",
        latin: "Al-Aziz",
        meaning: "El Todopoderoso",
        category: "poder",
    },
    NameEntry {
        arabic: "الْجَبَّارُ",
        latin: "Al-Jabbar",
        meaning: "El Dominador",
        category: "poder",
    },
    NameEntry {
        arabic: "الْخَالِقُ",
        latin: "Al-Khaliq",
        meaning: "El Creador",
        category: "creacion",
    },
    NameEntry {
        arabic: "الْبَارِئُ",
        latin: "Al-Bari",
        meaning: "El Productor",
        category: "creacion",
    },
    NameEntry {
        arabic: "الْمُصَوِّرُ",
        latin: "Al-Musawwir",
        meaning: "El Modelador",
        category: "creacion",
    },
    NameEntry {
        arabic: "الْغَفَّارُ",
        latin: "Al-Ghaffar",
        meaning: "El Indulgente",
        category: "misericordia",
    },
    NameEntry {
        arabic: "الْوَدُودُ",
        latin: "Al-Wadud",
        meaning: "El Amoroso",
        category: "amor",
    },
    NameEntry {
        arabic: "اللَّطِيفُ",
        latin: "Al-Latif",
        meaning: "El Sutil",
        category: "amor",
    },
    NameEntry {
        arabic: "الْحَكِيمُ",
        latin: "Al-Hakim",
        meaning: "El Sabio",
        category: "sabiduria",
    },
    NameEntry {
        arabic: "الْعَلِيمُ",
        latin: "Al-Alim",
        meaning: "El Omnisciente",
        category: "sabiduria",
    },
];
