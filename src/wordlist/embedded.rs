//! Hand-curated vocabularies bundled with the engine.
//!
//! Last tier of the word-list chain, used when neither network source answers.
//! Entries keep their curated order; a few duplicates are intentional.

/// Bundled vocabulary for `language`, if one exists.
pub fn embedded_vocabulary(language: &str) -> Option<&'static [&'static str]> {
    match language {
        "english" => Some(ENGLISH),
        "spanish" => Some(SPANISH),
        "french" => Some(FRENCH),
        "german" => Some(GERMAN),
        "italian" => Some(ITALIAN),
        "portuguese" => Some(PORTUGUESE),
        _ => None,
    }
}

/// Languages that have a bundled vocabulary.
pub const EMBEDDED_LANGUAGES: &[&str] = &[
    "english",
    "spanish",
    "french",
    "german",
    "italian",
    "portuguese",
];

const ENGLISH: &[&str] = &[
    "hello", "world", "computer", "language", "phone", "house", "water", "fire", "tree",
    "mountain", "river", "ocean", "sky", "sun", "moon", "star", "book", "pen", "paper", "table",
    "chair", "window", "door", "car", "bicycle", "airplane", "train", "ship", "bridge", "road",
    "city", "town", "friend", "family", "mother", "father", "brother", "sister", "child", "baby",
    "dog", "cat", "bird", "fish", "horse", "cow", "sheep", "chicken", "apple", "orange", "banana",
    "grape", "strawberry", "bread", "milk", "cheese", "head", "eye", "nose", "mouth", "ear",
    "hand", "foot", "arm", "leg", "finger", "heart", "brain", "stomach", "back", "shoulder",
    "knee", "elbow", "neck", "red", "blue", "green", "yellow", "black", "white", "purple",
    "orange", "pink", "brown", "gray", "silver", "gold", "violet", "turquoise", "crimson", "one",
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "potato", "tomato",
    "carrot", "onion", "garlic", "pepper", "salt", "sugar", "coffee", "tea", "beer", "wine",
    "juice", "soda", "chocolate", "cake", "pizza", "hamburger", "sandwich", "soup", "salad",
    "rice", "pasta", "meat", "rain", "snow", "wind", "storm", "cloud", "sunshine", "thunder",
    "lightning", "hot", "cold", "warm", "cool", "wet", "dry", "humid", "freezing", "forest",
    "desert", "beach", "island", "valley", "hill", "lake", "pond", "flower", "grass", "leaf",
    "branch", "root", "seed", "garden", "park", "internet", "email", "website", "software",
    "hardware", "keyboard", "mouse", "screen", "smartphone", "tablet", "laptop", "desktop",
    "printer", "camera", "video", "photo", "happy", "sad", "angry", "excited", "nervous", "calm",
    "peaceful", "stressed", "beautiful", "ugly", "smart", "stupid", "funny", "serious", "kind",
    "mean", "big", "small", "tall", "short", "fat", "thin", "old", "young", "new", "ancient",
    "fast", "slow", "strong", "weak", "rich", "poor", "expensive", "cheap", "run", "walk", "jump",
    "swim", "fly", "drive", "ride", "climb", "fall", "stand", "sit", "sleep", "wake", "eat",
    "drink", "cook", "clean", "wash", "build", "break", "read", "write", "speak", "listen", "see",
    "hear", "touch", "smell", "taste", "love", "hate", "like", "want", "need", "have", "give",
    "take", "buy", "sell",
];

const SPANISH: &[&str] = &[
    "hola", "mundo", "computadora", "idioma", "teléfono", "casa", "agua", "fuego", "árbol",
    "montaña", "río", "océano", "cielo", "sol", "luna", "estrella", "libro", "pluma", "papel",
    "mesa", "silla", "ventana", "puerta", "coche", "bicicleta", "avión", "tren", "barco", "puente",
    "carretera", "ciudad", "pueblo", "amigo", "familia", "madre", "padre", "hermano", "hermana",
    "niño", "bebé", "perro", "gato", "pájaro", "pez", "caballo", "vaca", "oveja", "pollo",
    "manzana", "naranja", "plátano", "uva", "fresa", "pan", "leche", "queso", "cabeza", "ojo",
    "nariz", "boca", "oreja", "mano", "pie", "brazo", "pierna", "dedo", "corazón", "cerebro",
    "estómago", "espalda", "hombro", "rodilla", "codo", "cuello", "rojo", "azul", "verde",
    "amarillo", "negro", "blanco", "morado", "naranja", "rosa", "marrón", "gris", "plata", "oro",
    "violeta", "turquesa", "carmesí", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete",
    "ocho", "nueve", "diez", "papa", "tomate", "zanahoria", "cebolla", "ajo", "pimienta", "sal",
    "azúcar", "café", "té", "cerveza", "vino", "jugo", "refresco", "chocolate", "pastel", "pizza",
    "hamburguesa", "sándwich", "sopa", "ensalada", "arroz", "pasta", "carne", "lluvia", "nieve",
    "viento", "tormenta", "nube", "sol", "trueno", "rayo", "caliente", "frío", "tibio", "fresco",
    "mojado", "seco", "húmedo", "helado", "bosque", "desierto", "playa", "isla", "valle", "colina",
    "lago", "estanque", "flor", "hierba", "hoja", "rama", "raíz", "semilla", "jardín", "parque",
    "feliz", "triste", "enojado", "emocionado", "nervioso", "tranquilo", "pacífico", "estresado",
    "hermoso", "feo", "inteligente", "tonto", "divertido", "serio", "amable", "malo", "grande",
    "pequeño", "alto", "bajo", "gordo", "delgado", "viejo", "joven", "nuevo", "antiguo", "rápido",
    "lento", "fuerte", "débil", "rico", "pobre", "caro", "barato", "correr", "caminar", "saltar",
    "nadar", "volar", "conducir", "montar", "subir", "caer", "estar", "amar", "odiar", "gustar",
    "querer", "necesitar", "tener", "dar", "tomar", "comprar", "vender",
];

const FRENCH: &[&str] = &[
    "bonjour", "monde", "ordinateur", "langue", "téléphone", "maison", "eau", "feu", "arbre",
    "montagne", "rivière", "océan", "ciel", "soleil", "lune", "étoile", "livre", "stylo", "papier",
    "table", "chaise", "fenêtre", "porte", "voiture", "bicyclette", "avion", "train", "bateau",
    "pont", "route", "ville", "village", "ami", "famille", "mère", "père", "frère", "sœur",
    "enfant", "bébé", "chien", "chat", "oiseau", "poisson", "cheval", "vache", "mouton", "poulet",
    "pomme", "orange", "banane", "raisin", "fraise", "pain", "lait", "fromage", "tête", "œil",
    "nez", "bouche", "oreille", "main", "pied", "bras", "jambe", "doigt", "cœur", "cerveau",
    "estomac", "dos", "épaule", "genou", "coude", "cou", "rouge", "bleu", "vert", "jaune", "noir",
    "blanc", "violet", "orange", "rose", "brun", "gris", "argent", "or", "violette", "turquoise",
    "cramoisi", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
    "café", "thé", "bière", "vin", "jus", "soda", "chocolat", "gâteau", "pizza", "hamburger",
    "sandwich", "soupe", "salade", "riz", "pâtes", "viande", "pluie", "neige", "vent", "orage",
    "nuage", "soleil", "tonnerre", "éclair", "chaud", "froid", "tiède", "frais", "mouillé", "sec",
    "humide", "gelé", "forêt", "désert", "plage", "île", "vallée", "colline", "lac", "étang",
    "fleur", "herbe", "feuille", "branche", "racine", "graine", "jardin", "parc", "heureux",
    "triste", "fâché", "excité", "nerveux", "calme", "paisible", "stressé", "beau", "laid",
    "intelligent", "stupide", "drôle", "sérieux", "gentil", "méchant", "grand", "petit", "haut",
    "court", "gros", "mince", "vieux", "jeune", "nouveau", "ancien", "rapide", "lent", "fort",
    "faible", "riche", "pauvre", "cher", "bon marché", "courir", "marcher", "sauter", "nager",
    "voler", "conduire", "monter", "grimper", "tomber", "aimer", "détester", "aimer", "vouloir",
    "avoir besoin", "avoir", "donner", "prendre", "acheter", "vendre",
];

const GERMAN: &[&str] = &[
    "hallo", "welt", "computer", "sprache", "telefon", "haus", "wasser", "feuer", "baum", "berg",
    "fluss", "ozean", "himmel", "sonne", "mond", "stern", "buch", "stift", "papier", "tisch",
    "stuhl", "fenster", "tür", "auto", "fahrrad", "flugzeug", "zug", "schiff", "brücke", "straße",
    "stadt", "dorf", "freund", "familie", "mutter", "vater", "bruder", "schwester", "kind", "baby",
    "hund", "katze", "vogel", "fisch", "pferd", "kuh", "schaf", "huhn", "apfel", "orange",
    "banane", "traube", "erdbeere", "brot", "milch", "käse", "kopf", "auge", "nase", "mund", "ohr",
    "hand", "fuß", "arm", "bein", "finger", "herz", "gehirn", "magen", "rücken", "schulter",
    "knie", "ellbogen", "hals", "rot", "blau", "grün", "gelb", "schwarz", "weiß", "lila", "orange",
    "rosa", "braun", "grau", "silber", "gold", "violett", "türkis", "karmesin", "eins", "zwei",
    "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn", "kaffee", "tee", "bier",
    "wein", "saft", "limonade", "schokolade", "kuchen", "regen", "schnee", "wind", "sturm",
    "wolke", "sonnenschein", "donner", "blitz", "heiß", "kalt", "warm", "kühl", "nass", "trocken",
    "feucht", "gefroren", "wald", "wüste", "strand", "insel", "tal", "hügel", "see", "teich",
    "blume", "gras", "blatt", "ast", "wurzel", "samen", "garten", "park", "glücklich", "traurig",
    "wütend", "aufgeregt", "nervös", "ruhig", "friedlich", "gestresst", "schön", "hässlich",
    "klug", "dumm", "lustig", "ernst", "freundlich", "gemein", "groß", "klein", "hoch", "kurz",
    "dick", "dünn", "alt", "jung", "neu", "alt", "schnell", "langsam", "stark", "schwach", "reich",
    "arm", "teuer", "billig", "laufen", "gehen", "springen", "schwimmen", "fliegen", "fahren",
    "reiten", "klettern", "lieben", "hassen", "mögen", "wollen", "brauchen", "haben", "geben",
    "nehmen", "kaufen", "verkaufen",
];

const ITALIAN: &[&str] = &[
    "ciao", "mondo", "computer", "lingua", "telefono", "casa", "acqua", "fuoco", "albero",
    "montagna", "fiume", "oceano", "cielo", "sole", "luna", "stella", "libro", "penna", "carta",
    "tavolo", "sedia", "finestra", "porta", "macchina", "bicicletta", "aereo", "treno", "nave",
    "ponte", "strada", "città", "paese", "amico", "famiglia", "madre", "padre", "fratello",
    "sorella", "bambino", "neonato", "cane", "gatto", "uccello", "pesce", "cavallo", "mucca",
    "pecora", "pollo", "mela", "arancia", "banana", "uva", "fragola", "pane", "latte", "formaggio",
    "testa", "occhio", "naso", "bocca", "orecchio", "mano", "piede", "braccio", "gamba", "dito",
    "cuore", "cervello", "stomaco", "schiena", "spalla", "ginocchio", "gomito", "collo", "rosso",
    "blu", "verde", "giallo", "nero", "bianco", "viola", "arancione", "rosa", "marrone", "grigio",
    "argento", "oro", "violetto", "turchese", "cremisi", "uno", "due", "tre", "quattro", "cinque",
    "sei", "sette", "otto", "nove", "dieci", "caffè", "tè", "birra", "vino", "succo", "soda",
    "cioccolato", "torta", "pioggia", "neve", "vento", "tempesta", "nuvola", "sole", "tuono",
    "fulmine", "caldo", "freddo", "tiepido", "fresco", "bagnato", "secco", "umido", "gelato",
    "foresta", "deserto", "spiaggia", "isola", "valle", "collina", "lago", "stagno", "fiore",
    "erba", "foglia", "ramo", "radice", "seme", "giardino", "parco", "felice", "triste",
    "arrabbiato", "eccitato", "nervoso", "calmo", "pacifico", "stressato", "bello", "brutto",
    "intelligente", "stupido", "divertente", "serio", "gentile", "cattivo", "grande", "piccolo",
    "alto", "basso", "grasso", "magro", "vecchio", "giovane", "nuovo", "antico", "veloce", "lento",
    "forte", "debole", "ricco", "povero", "costoso", "economico", "correre", "camminare",
    "saltare", "nuotare", "volare", "guidare", "cavalcare", "arrampicare", "amare", "odiare",
    "piacere", "volere", "aver bisogno", "avere", "dare", "prendere", "comprare", "vendere",
];

const PORTUGUESE: &[&str] = &[
    "olá", "mundo", "computador", "idioma", "telefone", "casa", "água", "fogo", "árvore",
    "montanha", "rio", "oceano", "céu", "sol", "lua", "estrela", "livro", "caneta", "papel",
    "mesa", "cadeira", "janela", "porta", "carro", "bicicleta", "avião", "trem", "navio", "ponte",
    "estrada", "cidade", "vila", "amigo", "família", "mãe", "pai", "irmão", "irmã", "criança",
    "bebê", "cachorro", "gato", "pássaro", "peixe", "cavalo", "vaca", "ovelha", "galinha", "maçã",
    "laranja", "banana", "uva", "morango", "pão", "leite", "queijo", "cabeça", "olho", "nariz",
    "boca", "orelha", "mão", "pé", "braço", "perna", "dedo", "coração", "cérebro", "estômago",
    "costas", "ombro", "joelho", "cotovelo", "pescoço", "vermelho", "azul", "verde", "amarelo",
    "preto", "branco", "roxo", "laranja", "rosa", "marrom", "cinza", "prata", "ouro", "violeta",
    "turquesa", "carmesim", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito",
    "nove", "dez", "café", "chá", "cerveja", "vinho", "suco", "refrigerante", "chocolate", "bolo",
    "chuva", "neve", "vento", "tempestade", "nuvem", "sol", "trovão", "relâmpago", "quente",
    "frio", "morno", "fresco", "molhado", "seco", "úmido", "congelado", "floresta", "deserto",
    "praia", "ilha", "vale", "colina", "lago", "lagoa", "flor", "grama", "folha", "galho", "raiz",
    "semente", "jardim", "parque", "feliz", "triste", "bravo", "animado", "nervoso", "calmo",
    "pacífico", "estressado", "bonito", "feio", "inteligente", "estúpido", "engraçado", "sério",
    "gentil", "mau", "grande", "pequeno", "alto", "baixo", "gordo", "magro", "velho", "jovem",
    "novo", "antigo", "rápido", "lento", "forte", "fraco", "rico", "pobre", "caro", "barato",
    "correr", "andar", "pular", "nadar", "voar", "dirigir", "andar", "escalar", "amar", "odiar",
    "gostar", "querer", "precisar", "ter", "dar", "tomar", "comprar", "vender",
];
