//! Static classification tables

/// Brazilian category table. Order matters: the first category with a
/// matching keyword wins.
pub const BR_CATEGORY_RULES: &[(&str, &[&str])] = &[
    (
        "BR Legislativo",
        &[
            "tv câmara", "tv camara", "tv justiça", "tv justica", "alerj", "almg", "alesp",
            "canal gov", "tv senado", "erga omnes", "câmara lins", "camara lins",
        ],
    ),
    (
        "BR Anime",
        &[
            "naruto", "death note", "hunter x hunter", "one piece", "boruto", "yu-gi-oh",
            "pokémon", "pokemon", "beyblade", "inuyasha", "jojo", "anime", "tokusato",
            "super onze", "dragon ball", "shippuden", "otaku sign",
        ],
    ),
    (
        "BR Kids",
        &[
            "nick jr", "nickelodeon", "turma da mônica", "turma da monica", "bob esponja",
            "dpa", "cocoricó", "cocorico", "teletubbies", "smurfs", "tartarugas ninja",
            "reino infantil", "padrinhos mágicos", "padrinhos magicos", "popeye", "oggy",
            "jetsons", "inspetor bugiganga", "icarly", "kenan", "babyfirst", "moranguinho",
            "pluto tv junior", "pluto tv kids", "kids club", "gospel cartoon",
            "ministério infantil", "ministerio infantil", "dm kids", "f. kids", "kids mais",
        ],
    ),
    (
        "BR Notícias",
        &[
            "cnn brasil", "jovem pan", "record news", "sbt news", "bm&c news", "011 news",
            "canal uol", "norte news", "bandnews", "tv 247", "times brasil", "canal rural",
            "notícias agrícolas", "noticias agricolas", "new brasil", "terraviva",
            "veja mais",
        ],
    ),
    (
        "BR Esportes",
        &[
            "fifa", "dazn", "pfl mma", "fuel tv", "racer", "ge tv", "sft combat",
            "kickboxing", "esporte", "sport", "baseball", "billiard", "poker", "combat",
            "horse", "play tv horse", "playtv horse", "unique sports", "rs sports",
            "trace sport", "people are awesome", "speedvision", "motorvision",
            "pluto tv turbo", "pluto tv esportes", "auto tv",
        ],
    ),
    (
        "BR Filmes",
        &[
            "pluto tv cine", "pluto tv filmes", "filmelier", "darkflix", "cinemonde",
            "adrenalina pura", "filmes suspense", "cine sucessos", "cine comédia",
            "cine comedia", "cine drama", "cine terror", "cine clássicos", "cine classicos",
            "cine romance", "cine família", "cine familia", "ficção científica",
            "ficcao cientifica", "filmes nacionais", "filmes aventura", "filmes ação",
            "filmes acão", "filmes de luta", "cine crime", "cine inspiração",
            "cine inspiracao", "sony one cinema", "movieark", "clube do terror",
            "terror trash", "pluto tv bang bang", "pluto tv policial", "netmovies",
            "runtime", "tu cine", "freetv acción", "freetv accion", "freetv drama",
            "freetv terror", "freetv familia", "freetv sureño", "freetv sureno",
            "spark tv luz", "gospel movie",
        ],
    ),
    (
        "BR Séries",
        &[
            "walking dead", "csi", "ncis", "charmed", "macgyver", "jornada nas estrelas",
            "star trek", "z nation", "rookie blue", "numbers", "feiticeira",
            "pluto tv séries", "pluto tv series", "séries classic", "series classic",
            "diff'rent strokes", "pluto tv novelas", "séries novelescas",
            "caçadora de relíquias", "cacadora de reliquias", "mistérios sem solução",
            "misterios sem solucao", "pluto tv retrô", "pluto tv retro",
            "pluto tv investigação", "pluto tv investigacao", "arquivos do fbi",
            "estado paranormal", "caçadores de óvnis", "cacadores de ovnis", "assombrações",
            "assombracoes", "pluto tv mistérios", "pluto tv misterios", "pluto tv aliens",
            "detetives médicos", "detetives medicos", "pronto-socorro", "acumuladores",
            "pluto tv vida real", "pluto tv curiosidade", "obsessão favorita",
            "obsessao favorita", "negócio fechado", "negocio fechado",
            "homem que veio do céu", "homem que veio do ceu",
        ],
    ),
    (
        "BR Entretenimento",
        &[
            "comedy central", "failarmy", "masterchef", "south park", "pegadinhas",
            "just for laughs", "shark tank", "encantador de cães", "encantador de caes",
            "pluto tv animais", "pet collective", "fashiontv", "caras tv",
            "pluto tv história", "pluto tv historia", "smithsonian", "pluto tv natureza",
            "nature time", "weatherspy", "pluto tv cozinha", "kfood", "gusto tv",
            "receitas fast", "tastemade", "pluto tv viagens", "gousa", "arirang",
            "bet pluto", "pluto tv gaming", "realmadrid tv", "geekdot", "salon line",
            "sony one emoções", "sony one emocoes", "malhacao", "malhação", "novela",
        ],
    ),
    (
        "BR Religiosas",
        &[
            "aparecida", "canção nova", "cancao nova", "rit tv", "rittv", "evangelizar",
            "novo tempo", "gospel", "igreja", "católica", "catolica", "cristão", "cristao",
            "promessas", "pai eterno", "terceiro anjo", "avivando", "apóstolos", "apostolos",
            "imjc", "kuriakos", "adorador", "adorar", "katholika", "família de jesus",
            "familia de jesus", "maanaim", "manancial", "tv sbn", "angel tv",
            "caminho antigo", "tv alpha", "web tv catolica", "unifé", "unife", "tv feliz",
            "tenda tv",
        ],
    ),
    (
        "BR Música",
        &[
            "stingray", "karaokê", "karaoke", "forró", "forro", "sertanejo", "pop retrô",
            "pop retro", "rock show", "qwest tv", "hits", "kpop", "classique tv",
            "rede blitz", "rádio forró", "radio forro", "hip-hop", "hip hop", "caipira",
            "pluto tv shows por stingray", "pluto tv paisagens", "pluto tv karaokê",
            "tikitok radio", "tiktok radio",
        ],
    ),
];

pub const BR_FALLBACK_CATEGORY: &str = "BR Variedades";

/// Category whose entries are ordered by `NEWS_RELEVANCE`
pub const NEWS_CATEGORY: &str = "BR Notícias";

/// News keywords, most relevant first
pub const NEWS_RELEVANCE: &[&str] = &[
    "cnn brasil",
    "record news",
    "bandnews",
    "jovem pan",
    "sbt news",
    "bm&c news",
    "times brasil",
    "canal uol",
    "canal rural",
    "terraviva",
    "new brasil",
    "veja mais",
    "notícias agrícolas",
    "noticias agricolas",
    "tv 247",
    "011 news",
    "norte news",
];

/// Name keywords that place a channel in the cross-region Rock group
pub const ROCK_KEYWORDS: &[&str] = &[
    "rock x metal",
    "rock alternative",
    "classic rock",
    "electro rock",
    "now rock",
    "vevo rock",
    "live music",
    "rock tv",
    "rock show",
    "mtv rocks",
    "rock!",
];

pub const VH1_CATEGORY: &str = "VH1";
pub const MTV_CATEGORY: &str = "MTV";
pub const ROCK_CATEGORY: &str = "Rock";
pub const MUSIC_CATEGORY: &str = "Music";
pub const OTHER_CATEGORY: &str = "Other";

pub const REGION_DISPLAY: &[(&str, &str)] = &[
    ("BR", "Brasil"),
    ("br", "Brasil"),
    ("US", "USA"),
    ("us", "USA"),
    ("GB", "UK"),
    ("gb", "UK"),
    ("CA", "Canada"),
    ("ca", "Canada"),
    ("AU", "Australia"),
    ("NZ", "New Zealand"),
    ("PT", "Português"),
    ("AO", "Português"),
    ("MZ", "Português"),
    ("CV", "Português"),
];
