//! 日干×月支喜用神對照表
//!
//! 資料依傳統調候用神對照表轉錄，保持原件字面——包括原件將陽水天干
//! 「壬」誤刻作「王」的幾處。查表結果一律經 [`normalize`](super::normalize)
//! 改正後再行拆解。

use crate::ganzhi::{Branch, Stem};

use Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};

/// 對照表型別：外層按日干、內層按月支的靜態關聯表。
pub(crate) type Table = &'static [(Stem, &'static [(Branch, &'static str)])];

/// 十日干×十二月支的喜用神天干對照表。
pub(crate) static USEFUL_GOD_TABLE: Table = &[
    (
        Stem::Jia,
        &[
            (Yin, "丙癸"),
            (Mao, "庚丙丁戊己"),
            (Chen, "庚丁壬"),
            (Si, "癸庚丁"),
            (Wu, "癸庚丁"),
            (Wei, "癸庚丁"),
            (Shen, "庚壬丁"),
            (You, "庚丙丁"),
            (Xu, "庚甲壬癸丁"),
            (Hai, "庚戊丙丁"),
            (Zi, "丁庚丙"),
            (Chou, "丁庚丙"),
        ],
    ),
    (
        Stem::Yi,
        &[
            (Yin, "丙癸"),
            (Mao, "丙癸"),
            (Chen, "癸丙戊"),
            (Si, "癸"),
            (Wu, "癸丙"),
            (Wei, "癸丙"),
            (Shen, "丙癸己"),
            (You, "癸丙丁"),
            (Xu, "癸辛"),
            (Hai, "丙戊"),
            (Zi, "丙"),
            (Chou, "丙"),
        ],
    ),
    (
        Stem::Bing,
        &[
            (Yin, "壬庚"),
            (Mao, "壬己"),
            (Chen, "壬甲"),
            (Si, "壬庚癸"),
            (Wu, "壬庚"),
            (Wei, "壬庚"),
            (Shen, "壬戊"),
            (You, "壬癸"),
            (Xu, "甲壬"),
            (Hai, "甲戊庚壬"),
            (Zi, "壬戊己"),
            (Chou, "壬甲"),
        ],
    ),
    (
        Stem::Ding,
        &[
            (Yin, "甲庚"),
            (Mao, "庚甲"),
            (Chen, "甲庚"),
            (Si, "甲庚"),
            (Wu, "壬庚癸"),
            (Wei, "甲壬庚"),
            (Shen, "甲庚丙戊"),
            (You, "甲庚丙戊"),
            (Xu, "甲庚戊"),
            (Hai, "甲庚"),
            (Zi, "甲庚"),
            (Chou, "甲庚"),
        ],
    ),
    (
        Stem::Wu,
        &[
            (Yin, "丙甲癸"),
            (Mao, "丙甲癸"),
            (Chen, "甲丙癸"),
            (Si, "甲丙癸"),
            (Wu, "壬甲丙"),
            (Wei, "癸丙甲"),
            (Shen, "丙癸甲"),
            (You, "丙癸"),
            (Xu, "甲丙癸"),
            (Hai, "甲丙"),
            (Zi, "丙甲"),
            (Chou, "丙甲"),
        ],
    ),
    (
        Stem::Ji,
        &[
            (Yin, "丙庚甲"),
            (Mao, "甲癸丙"),
            (Chen, "丙癸甲"),
            (Si, "癸丙"),
            (Wu, "癸丙"),
            (Wei, "癸丙"),
            (Shen, "丙癸"),
            (You, "丙癸"),
            (Xu, "甲丙癸"),
            (Hai, "丙甲戊"),
            (Zi, "丙甲戊"),
            (Chou, "丙甲戊"),
        ],
    ),
    (
        Stem::Geng,
        &[
            (Yin, "戊甲王丙丁"),
            (Mao, "丁甲庚丙"),
            (Chen, "甲丁壬癸"),
            (Si, "壬戊丙丁"),
            (Wu, "壬癸"),
            (Wei, "丁甲"),
            (Shen, "丁甲"),
            (You, "丁甲丙"),
            (Xu, "甲壬"),
            (Hai, "丁丙"),
            (Zi, "丁甲丙"),
            (Chou, "丙丁甲"),
        ],
    ),
    (
        Stem::Xin,
        &[
            (Yin, "己壬庚"),
            (Mao, "壬甲"),
            (Chen, "壬甲"),
            (Si, "壬甲癸"),
            (Wu, "壬己癸"),
            (Wei, "壬庚甲"),
            (Shen, "壬甲戊"),
            (You, "壬甲"),
            (Xu, "壬甲"),
            (Hai, "壬丙"),
            (Zi, "丙戊壬甲"),
            (Chou, "丙壬戊己"),
        ],
    ),
    (
        Stem::Ren,
        &[
            (Yin, "庚丙戊"),
            (Mao, "戊辛庚"),
            (Chen, "甲庚"),
            (Si, "王辛庚癸"),
            (Wu, "癸庚辛"),
            (Wei, "辛甲"),
            (Shen, "戊丁"),
            (You, "甲庚"),
            (Xu, "甲丙"),
            (Hai, "戊丙庚"),
            (Zi, "戊丙"),
            (Chou, "丙丁甲"),
        ],
    ),
    (
        Stem::Gui,
        &[
            (Yin, "辛丙"),
            (Mao, "庚辛"),
            (Chen, "丙辛甲"),
            (Si, "辛"),
            (Wu, "庚辛壬癸"),
            (Wei, "庚辛壬癸"),
            (Shen, "丁"),
            (You, "辛丙"),
            (Xu, "辛甲壬癸"),
            (Hai, "庚辛戊丁"),
            (Zi, "丙辛"),
            (Chou, "丙丁"),
        ],
    ),
];
