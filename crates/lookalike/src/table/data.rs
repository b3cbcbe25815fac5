// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in equivalence data.
//!
//! Glyph groups per letter, in order: the letter with its ASCII lookalikes,
//! confusables from other scripts, mathematical and letterlike symbols,
//! enclosed and fullwidth forms, small capitals and modifier letters.
//! Sequences are multi-character ASCII renderings of the letter.

/// Raw equivalents of one canonical character.
pub(super) struct Equivalence {
    pub(super) base: char,
    pub(super) glyphs: &'static str,
    pub(super) sequences: &'static [&'static str],
}

pub(super) static EQUIVALENCES: &[Equivalence] = &[
    Equivalence {
        base: 'a',
        glyphs: concat!(
            "a4@^",
            "аАɑα⍺ᴀ∂",
            "𝐀𝐚𝐴𝑎𝑨𝒂𝒜𝒶𝓐𝓪𝔄𝔞𝔸𝕒𝕬𝖆𝖠𝖺𝗔𝗮𝘈𝘢𝘼𝙖𝙰𝚊𝚨𝛂𝛢𝛼𝜜𝜶𝝖𝝰𝞐𝞪Α",
            "⒜ⒶⓐＡａ🄐🄰🅐🅰🇦",
            "ᴬᵃₐ",
        ),
        sequences: &["/-\\", "/\\"],
    },
    Equivalence {
        base: 'b',
        glyphs: concat!(
            "b8",
            "ЬьвВƅƄβᏏß",
            "𝐁𝐛𝐵𝑏𝑩𝒃𝒷𝓑𝓫𝔅𝔟𝔹𝕓𝕭𝖇𝖡𝖻𝗕𝗯𝘉𝘣𝘽𝙗𝙱𝚋ℬ𝚩𝛣𝜝𝝗𝞑Β",
            "⒝ⒷⓑＢｂ🄑🄱🅑🅱🇧",
            "ʙᴮᵇ",
        ),
        sequences: &["|3", "13", "|8"],
    },
    Equivalence {
        base: 'c',
        glyphs: concat!(
            "c(<[{",
            "сСϲϹⅽⅭᴄ¢©",
            "𝐂𝐜𝐶𝑐𝑪𝒄𝒞𝒸𝓒𝓬𝔠𝕔𝕮𝖈𝖢𝖼𝗖𝗰𝘊𝘤𝘾𝙘𝙲𝚌ℂℭ",
            "⒞ⒸⓒＣｃ🄒🄲🅒🅲🇨",
            "ᶜꟲ",
        ),
        sequences: &[],
    },
    Equivalence {
        base: 'd',
        glyphs: concat!(
            "d",
            "ԁɗⅾⅮꓒđ",
            "𝐃𝐝𝐷𝑑𝑫𝒅𝒟𝒹𝓓𝓭𝔇𝔡𝔻𝕕𝕯𝖉𝖣𝖽𝗗𝗱𝘋𝘥𝘿𝙙𝙳𝚍ⅅⅆ",
            "⒟ⒹⓓＤｄ🄓🄳🅓🅳🇩",
            "ᴅᴰᵈ",
        ),
        sequences: &["|)", "|]", "[)"],
    },
    Equivalence {
        base: 'e',
        glyphs: concat!(
            "e3&",
            "еЕҽ℮εɛ€ᴇ",
            "𝐄𝐞𝐸𝑒𝑬𝒆𝓔𝓮𝔈𝔢𝔼𝕖𝕰𝖊𝖤𝖾𝗘𝗲𝘌𝘦𝙀𝙚𝙴𝚎ℯℰⅇ𝚬𝛦𝜠𝝚𝞔Ε",
            "⒠ⒺⓔＥｅ🄔🄴🅔🅴🇪",
            "ᴱᵉₑ",
        ),
        sequences: &["[-"],
    },
    Equivalence {
        base: 'f',
        glyphs: concat!(
            "f",
            "ƒϝϜ",
            "𝐅𝐟𝐹𝑓𝑭𝒇𝒻𝓕𝓯𝔉𝔣𝔽𝕗𝕱𝖋𝖥𝖿𝗙𝗳𝘍𝘧𝙁𝙛𝙵𝚏ℱ",
            "⒡ⒻⓕＦｆ🄕🄵🅕🅵🇫",
            "ᶠꜰꟳ",
        ),
        sequences: &["|=", "ph", "|#"],
    },
    Equivalence {
        base: 'g',
        glyphs: concat!(
            "g69",
            "ɡցǥ",
            "𝐆𝐠𝐺𝑔𝑮𝒈𝒢𝓖𝓰𝔊𝔤𝔾𝕘𝕲𝖌𝖦𝗀𝗚𝗴𝘎𝘨𝙂𝙜𝙶𝚐ℊ",
            "⒢ⒼⓖＧｇ🄖🄶🅖🅶🇬",
            "ɢᴳᵍ",
        ),
        sequences: &["(_+"],
    },
    Equivalence {
        base: 'h',
        glyphs: concat!(
            "h#",
            "һҺНɦᏂн",
            "𝐇𝐡𝐻𝑯𝒉𝒽𝓗𝓱𝔥𝕙𝕳𝖍𝖧𝗁𝗛𝗵𝘏𝘩𝙃𝙝𝙷𝚑ℋℌℍℎ𝚮𝛨𝜢𝝜𝞖Η",
            "⒣ⒽⓗＨｈ🄗🄷🅗🅷🇭",
            "ʜʰᴴₕ",
        ),
        sequences: &["|-|", "]-[", "}{", "(-)"],
    },
    Equivalence {
        base: 'i',
        glyphs: concat!(
            "i1!|",
            "іІⅰⅠιɪӏı¡",
            "𝐈𝐢𝐼𝑖𝑰𝒊𝒾𝓘𝓲𝔦𝕀𝕚𝕴𝖎𝖨𝗂𝗜𝗶𝘐𝘪𝙄𝙞𝙸𝚒ℐℑⅈ𝚰𝛪𝜤𝝞𝞘Ι𝛊𝜄𝜾𝝸𝞲",
            "⒤ⒾⓘＩｉ🄘🄸🅘🅸🇮",
            "ᴵᵢⁱ",
        ),
        sequences: &[],
    },
    Equivalence {
        base: 'j',
        glyphs: concat!(
            "j]",
            "јЈϳʝ",
            "𝐉𝐣𝐽𝑗𝑱𝒋𝒥𝒿𝓙𝓳𝔍𝔧𝕁𝕛𝕵𝖏𝖩𝗃𝗝𝗷𝘑𝘫𝙅𝙟𝙹𝚓ⅉ",
            "⒥ⒿⓙＪｊ🄙🄹🅙🅹🇯",
            "ʲᴊᴶⱼ",
        ),
        sequences: &["_|"],
    },
    Equivalence {
        base: 'k',
        glyphs: concat!(
            "k",
            "кКκᴋⲕ",
            "𝐊𝐤𝐾𝑘𝑲𝒌𝒦𝓀𝓚𝓴𝔎𝔨𝕂𝕜𝕶𝖐𝖪𝗄𝗞𝗸𝘒𝘬𝙆𝙠𝙺𝚔𝚱𝛫𝜥𝝟𝞙Κ𝛋𝜅𝜿𝝹𝞳",
            "⒦ⓀⓚＫｋ🄚🄺🅚🅺🇰",
            "ᴷᵏₖ",
        ),
        sequences: &["|<", "|{"],
    },
    Equivalence {
        base: 'l',
        glyphs: concat!(
            "l1|",
            "ⅼⅬℓǀӀ",
            "𝐋𝐥𝐿𝑙𝑳𝒍𝓁𝓛𝓵𝔏𝔩𝕃𝕝𝕷𝖑𝖫𝗅𝗟𝗹𝘓𝘭𝙇𝙡𝙻𝚕ℒ",
            "⒧ⓁⓛＬｌ🄛🄻🅛🅻🇱",
            "ʟˡᴸₗ",
        ),
        sequences: &["|_"],
    },
    Equivalence {
        base: 'm',
        glyphs: concat!(
            "m",
            "мМⅿⅯᴍ",
            "𝐌𝐦𝑀𝑚𝑴𝒎𝓂𝓜𝓶𝔐𝔪𝕄𝕞𝕸𝖒𝖬𝗆𝗠𝗺𝘔𝘮𝙈𝙢𝙼𝚖ℳ𝚳𝛭𝜧𝝡𝞛Μ",
            "⒨ⓂⓜＭｍ🄜🄼🅜🅼🇲",
            "ᴹᵐₘ",
        ),
        sequences: &["|\\/|", "/\\/\\", "^^", "rn", "nn"],
    },
    Equivalence {
        base: 'n',
        glyphs: concat!(
            "n",
            "ոɴηпП",
            "𝐍𝐧𝑁𝑛𝑵𝒏𝒩𝓃𝓝𝓷𝔑𝔫𝕟𝕹𝖓𝖭𝗇𝗡𝗻𝘕𝘯𝙉𝙣𝙽𝚗ℕ𝚴𝛮𝜨𝝢𝞜Ν",
            "⒩ⓃⓝＮｎ🄝🄽🅝🅽🇳",
            "ᴺⁿₙ",
        ),
        sequences: &["|\\|", "/\\/", "^/"],
    },
    Equivalence {
        base: 'o',
        glyphs: concat!(
            "o0",
            "оОοօᴏⲟ°ø𐐄𐐬",
            "𝐎𝐨𝑂𝑜𝑶𝒐𝒪𝓞𝓸𝔒𝔬𝕆𝕠𝕺𝖔𝖮𝗈𝗢𝗼𝘖𝘰𝙊𝙤𝙾𝚘ℴ𝚶𝛐𝛰𝜊𝜪𝝄𝝤𝝾𝞞𝞸Ο𝛔𝜎𝝈𝞂𝞼σ",
            "⒪ⓄⓞＯｏ🄞🄾🅞🅾🇴",
            "ᴼᵒₒ",
        ),
        sequences: &["()", "[]"],
    },
    Equivalence {
        base: 'p',
        glyphs: concat!(
            "p",
            "рРρⲣ",
            "𝐏𝐩𝑃𝑝𝑷𝒑𝒫𝓅𝓟𝓹𝔓𝔭𝕡𝕻𝖕𝖯𝗉𝗣𝗽𝘗𝘱𝙋𝙥𝙿𝚙℘ℙ𝚸𝛲𝜬𝝦𝞠Ρ𝛒𝜌𝝆𝞀𝞺",
            "⒫ⓅⓟＰｐ🄟🄿🅟🅿🇵",
            "ᴘᴾᵖₚ",
        ),
        sequences: &["|*", "|o", "|>"],
    },
    Equivalence {
        base: 'q',
        glyphs: concat!(
            "q9",
            "ԛԚɋ",
            "𝐐𝐪𝑄𝑞𝑸𝒒𝒬𝓆𝓠𝓺𝔔𝔮𝕢𝕼𝖖𝖰𝗊𝗤𝗾𝘘𝘲𝙌𝙦𝚀𝚚ℚ",
            "⒬ⓆⓠＱｑ🄠🅀🅠🆀🇶",
            "ꞯꟴ𐞥",
        ),
        sequences: &["(_,)", "0_"],
    },
    Equivalence {
        base: 'r',
        glyphs: concat!(
            "r",
            "гʀᴦɾ®𐒴𐓜",
            "𝐑𝐫𝑅𝑟𝑹𝒓𝓇𝓡𝓻𝔯𝕣𝕽𝖗𝖱𝗋𝗥𝗿𝘙𝘳𝙍𝙧𝚁𝚛ℛℜℝ",
            "⒭ⓇⓡＲｒ🄡🅁🅡🆁🇷",
            "ʳᴿᵣ",
        ),
        sequences: &["|2", "12"],
    },
    Equivalence {
        base: 's',
        glyphs: concat!(
            "s5",
            "ѕЅꜱʂ§$",
            "𝐒𝐬𝑆𝑠𝑺𝒔𝒮𝓈𝓢𝓼𝔖𝔰𝕊𝕤𝕾𝖘𝖲𝗌𝗦𝘀𝘚𝘴𝙎𝙨𝚂𝚜",
            "⒮ⓈⓢＳｓ🄢🅂🅢🆂🇸",
            "ˢₛ",
        ),
        sequences: &[],
    },
    Equivalence {
        base: 't',
        glyphs: concat!(
            "t7+",
            "тТτ†",
            "𝐓𝐭𝑇𝑡𝑻𝒕𝒯𝓉𝓣𝓽𝔗𝔱𝕋𝕥𝕿𝖙𝖳𝗍𝗧𝘁𝘛𝘵𝙏𝙩𝚃𝚝𝚻𝛵𝜯𝝩𝞣Τ",
            "⒯ⓉⓣＴｔ🄣🅃🅣🆃🇹",
            "ᴛᵀᵗₜ",
        ),
        sequences: &[],
    },
    Equivalence {
        base: 'u',
        glyphs: concat!(
            "u",
            "υսʋᴜµ",
            "𝐔𝐮𝑈𝑢𝑼𝒖𝒰𝓊𝓤𝓾𝔘𝔲𝕌𝕦𝖀𝖚𝖴𝗎𝗨𝘂𝘜𝘶𝙐𝙪𝚄𝚞𝛖𝜐𝝊𝞄𝞾",
            "⒰ⓊⓤＵｕ🄤🅄🅤🆄🇺",
            "ᵁᵘᵤ",
        ),
        sequences: &["(_)", "|_|"],
    },
    Equivalence {
        base: 'v',
        glyphs: concat!(
            "v",
            "νѵѴⅴⅤᴠ",
            "𝐕𝐯𝑉𝑣𝑽𝒗𝒱𝓋𝓥𝓿𝔙𝔳𝕍𝕧𝖁𝖛𝖵𝗏𝗩𝘃𝘝𝘷𝙑𝙫𝚅𝚟𝛎𝜈𝝂𝝼𝞶",
            "⒱ⓋⓥＶｖ🄥🅅🅥🆅🇻",
            "ᵛᵥⱽ",
        ),
        sequences: &["\\/"],
    },
    Equivalence {
        base: 'w',
        glyphs: concat!(
            "w",
            "ѡԝԜɯᴡω",
            "𝐖𝐰𝑊𝑤𝑾𝒘𝒲𝓌𝓦𝔀𝔚𝔴𝕎𝕨𝖂𝖜𝖶𝗐𝗪𝘄𝘞𝘸𝙒𝙬𝚆𝚠",
            "⒲ⓌⓦＷｗ🄦🅆🅦🆆🇼",
            "ʷᵂ",
        ),
        sequences: &["\\/\\/", "vv", "\\^/"],
    },
    Equivalence {
        base: 'x',
        glyphs: concat!(
            "x",
            "хХχⅹⅩ×",
            "𝐗𝐱𝑋𝑥𝑿𝒙𝒳𝓍𝓧𝔁𝔛𝔵𝕏𝕩𝖃𝖝𝖷𝗑𝗫𝘅𝘟𝘹𝙓𝙭𝚇𝚡𝚾𝛸𝜲𝝬𝞦Χ",
            "⒳ⓍⓧＸｘ🄧🅇🅧🆇🇽",
            "ˣₓ",
        ),
        sequences: &["><", ")("],
    },
    Equivalence {
        base: 'y',
        glyphs: concat!(
            "y",
            "уУүҮɣγ¥",
            "𝐘𝐲𝑌𝑦𝒀𝒚𝒴𝓎𝓨𝔂𝔜𝔶𝕐𝕪𝖄𝖞𝖸𝗒𝗬𝘆𝘠𝘺𝙔𝙮𝚈𝚢𝚼𝛶𝜰𝝪𝞤Υ",
            "⒴ⓎⓨＹｙ🄨🅈🅨🆈🇾",
            "ʏʸ",
        ),
        sequences: &["`/", "'/"],
    },
    Equivalence {
        base: 'z',
        glyphs: concat!(
            "z2",
            "ᴢʐ",
            "𝐙𝐳𝑍𝑧𝒁𝒛𝒵𝓏𝓩𝔃𝔷𝕫𝖅𝖟𝖹𝗓𝗭𝘇𝘡𝘻𝙕𝙯𝚉𝚣ℤℨ𝚭𝛧𝜡𝝛𝞕Ζ",
            "⒵ⓏⓩＺｚ🄩🅉🅩🆉🇿",
            "ᶻ",
        ),
        sequences: &["7_"],
    },
];
