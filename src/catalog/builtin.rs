//! Embedded administrative hierarchy of Senegal.
//!
//! Raw data is kept as authored, including the known irregularities
//! (duplicate arrondissement code "03" in GOUDIRY, an empty commune name
//! under KOULOR). `geo-cascade lint` reports them.

use super::source::{
    ArrondissementSource, CatalogSource, CommuneSource, DepartmentSource, RegionSource,
};

struct RegionLit {
    code: &'static str,
    name: &'static str,
    departments: &'static [DepartmentLit],
}

struct DepartmentLit {
    key: &'static str,
    code: &'static str,
    name: &'static str,
    arrondissements: &'static [ArrondissementLit],
}

struct ArrondissementLit {
    code: &'static str,
    name: &'static str,
    communes: &'static [(&'static str, &'static str)],
}

pub const COUNTRY: &str = "Sénégal";

/// Build the nested source for the embedded dataset.
pub fn source() -> CatalogSource {
    CatalogSource {
        country: COUNTRY.to_string(),
        regions: REGIONS
            .iter()
            .map(|r| RegionSource {
                code: r.code.to_string(),
                name: r.name.to_string(),
                departments: r
                    .departments
                    .iter()
                    .map(|d| DepartmentSource {
                        key: Some(d.key.to_string()),
                        code: d.code.to_string(),
                        name: d.name.to_string(),
                        arrondissements: d
                            .arrondissements
                            .iter()
                            .map(|a| ArrondissementSource {
                                code: a.code.to_string(),
                                name: a.name.to_string(),
                                communes: a
                                    .communes
                                    .iter()
                                    .map(|&(code, name)| CommuneSource {
                                        code: code.to_string(),
                                        name: name.to_string(),
                                    })
                                    .collect(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

static REGIONS: &[RegionLit] = &[
    RegionLit {
        code: "DAKAR",
        name: "Dakar",
        departments: &[
            DepartmentLit {
                key: "DAKAR",
                code: "01",
                name: "DAKAR",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "ALMADIES",
                        communes: &[
                            ("01", "NGOR"),
                            ("02", "OUAKAM"),
                            ("03", "YOFF"),
                            ("04", "MERMOZ-SACRE-COEUR"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "DAKAR-PLATEAU",
                        communes: &[
                            ("01", "PLATEAU"),
                            ("02", "MEDINA"),
                            ("03", "FANN-POINT E-AMITIE"),
                            ("04", "GUEULE TAPEE-FASS-COLOBANE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "GRAND-DAKAR",
                        communes: &[
                            ("01", "GRAND-DAKAR"),
                            ("02", "BISCUITERIE"),
                            ("03", "HANN-BEL AIR"),
                            ("04", "SICAP-LIBERTE"),
                            ("05", "DIEUPPEUL-DERKLE"),
                            ("06", "HLM"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "PARCELLES ASSAINIES",
                        communes: &[
                            ("01", "PARCELLES ASSAINIES"),
                            ("02", "CAMBERENE"),
                            ("03", "GRAND-YOFF"),
                            ("04", "PATTE D'OIE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "05",
                        name: "GOREE",
                        communes: &[("01", "GOREE")],
                    },
                ],
            },
            DepartmentLit {
                key: "PIKINE",
                code: "02",
                name: "PIKINE",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "DAGOUDANE",
                        communes: &[
                            ("01", "PIKINE EST"),
                            ("02", "PIKINE OUEST"),
                            ("03", "PIKINE NORD"),
                            ("04", "DALIFORT"),
                            ("05", "DJIDAH THIAROYE KAO"),
                            ("06", "GUINAW RAIL NORD"),
                            ("07", "GUINAW RAIL SUD"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "THIAROYE",
                        communes: &[
                            ("01", "THIAROYE SUR MER"),
                            ("02", "THIAROYE GARE"),
                            ("03", "TIVAOUANE DIACKSAO"),
                            ("04", "DIAMAGUENE SICAP MBAO"),
                            ("05", "MBAO"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "NIAYES",
                        communes: &[
                            ("01", "KEUR MASSAR"),
                            ("02", "MALIKA"),
                            ("03", "YEUMBEUL NORD"),
                            ("04", "YEUMBEUL SUD"),
                        ],
                    },
                ],
            },
            DepartmentLit {
                key: "GUEDIAWAYE",
                code: "03",
                name: "GUEDIAWAYE",
                arrondissements: &[ArrondissementLit {
                    code: "01",
                    name: "GUEDIAWAYE",
                    communes: &[
                        ("01", "GOLF SUD"),
                        ("02", "SAHM NOTAIRE"),
                        ("03", "NDIAREME LIMAMOULAYE"),
                        ("04", "WAKHINANE NIMZATT"),
                        ("05", "MEDINA GOUNASS"),
                    ],
                }],
            },
            DepartmentLit {
                key: "RUFISQUE",
                code: "04",
                name: "RUFISQUE",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "RUFISQUE",
                        communes: &[
                            ("01", "RUFISQUE EST"),
                            ("02", "RUFISQUE NORD"),
                            ("03", "RUFISQUE OUEST"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "BAMBYLOR",
                        communes: &[
                            ("01", "BAMBYLOR"),
                            ("02", "TIVAOUANE PEULH-NIAGA"),
                            ("03", "YENE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SANGALKAM",
                        communes: &[
                            ("01", "SANGALKAM"),
                            ("02", "BARGNY"),
                            ("03", "SEBIKOTANE"),
                            ("04", "DIAMNIADIO"),
                            ("05", "SENDOU"),
                            ("06", "JAXAAY-PARCELLES"),
                        ],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "ZIGUINCHOR",
        name: "Ziguinchor",
        departments: &[
            DepartmentLit {
                key: "BIGNONA",
                code: "01",
                name: "BIGNONA",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "TENDOUCK",
                        communes: &[
                            ("01", "MANGAGOULACK"),
                            ("02", "MLOMP"),
                            ("03", "BALINGORE"),
                            ("04", "DIEGOUNE"),
                            ("05", "KARTIACK"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "TENGHORY",
                        communes: &[
                            ("01", "TENGHORY"),
                            ("02", "COUBALAN"),
                            ("03", "NIAMONE"),
                            ("04", "OUONCK"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SINDIAN",
                        communes: &[
                            ("01", "SINDIAN"),
                            ("02", "DJIBIDIONE"),
                            ("03", "OULAMPANE"),
                            ("04", "SUELLE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "KATABA 1",
                        communes: &[
                            ("01", "KATABA 1"),
                            ("02", "DJINAKY"),
                            ("03", "KAFOUNTINE"),
                            ("04", "DIOULOULOU"),
                        ],
                    },
                ],
            },
            DepartmentLit {
                key: "OUSSOUYE",
                code: "02",
                name: "OUSSOUYE",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "CABROUSSE",
                        communes: &[("01", "DIEMBERING"), ("02", "SANTHIABA MANJACQUE")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "LOUDIA OUOLOF",
                        communes: &[("01", "OUKOUT"), ("02", "MLOMP"), ("03", "OUSSOUYE")],
                    },
                ],
            },
            DepartmentLit {
                key: "ZIGUINCHOR",
                code: "03",
                name: "ZIGUINCHOR",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "NIAGUIS",
                        communes: &[
                            ("01", "NIAGUIS"),
                            ("02", "ADEANE"),
                            ("03", "BOUTOUPA-CAMARACOUNDA"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "NYASSIA",
                        communes: &[("01", "NYASSIA"), ("02", "ENAMPORE")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "ZIGUINCHOR",
                        communes: &[("01", "ZIGUINCHOR")],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "DIOURBEL",
        name: "Diourbel",
        departments: &[
            DepartmentLit {
                key: "BAMBEY",
                code: "01",
                name: "BAMBEY",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "BABA GARAGE",
                        communes: &[
                            ("01", "BABA GARAGE"),
                            ("02", "DINGUIRAYE"),
                            ("03", "KEUR SAMBA KANE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "LAMBAYE",
                        communes: &[
                            ("01", "LAMBAYE"),
                            ("02", "GAWANE"),
                            ("03", "NGOGOM"),
                            ("04", "REFANE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "NGOYE",
                        communes: &[
                            ("01", "NGOYE"),
                            ("02", "DANGALMA"),
                            ("03", "NDONDOL"),
                            ("04", "THIAKHAR"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "BAMBEY",
                        communes: &[("01", "BAMBEY")],
                    },
                ],
            },
            DepartmentLit {
                key: "DIOURBEL",
                code: "02",
                name: "DIOURBEL",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "NDOULO",
                        communes: &[
                            ("01", "NDOULO"),
                            ("02", "NGOHE"),
                            ("03", "PATTAR"),
                            ("04", "TOCKY GARE"),
                            ("05", "TOURE MBONDE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "NDINDY",
                        communes: &[
                            ("01", "NDINDY"),
                            ("02", "DANKH SENE"),
                            ("03", "GADE ESCALE"),
                            ("04", "KEUR NGALGOU"),
                            ("05", "NDANKH SESSENE"),
                            ("06", "TAIBA MOUTOUPHA"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "DIOURBEL",
                        communes: &[("01", "DIOURBEL")],
                    },
                ],
            },
            DepartmentLit {
                key: "MBACKE",
                code: "03",
                name: "MBACKE",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "KAEL",
                        communes: &[
                            ("01", "KAEL"),
                            ("02", "DAROU SALAM TYP"),
                            ("03", "DENDEYE GOUYGUI"),
                            ("04", "MADINA"),
                            ("05", "NDIOUMANE"),
                            ("06", "TAIBA THIEKENE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "NDAME",
                        communes: &[
                            ("01", "TOUBA MOSQUEE"),
                            ("02", "DALLA NGABOU"),
                            ("03", "MISSIRAH"),
                            ("04", "NGHAYE"),
                            ("05", "TOUBA FALL"),
                            ("06", "TOUBA MBOUL"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "TAIF",
                        communes: &[("01", "TAIF"), ("02", "SADIO")],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "MBACKE",
                        communes: &[("01", "MBACKE")],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "SAINT-LOUIS",
        name: "Saint-Louis",
        departments: &[
            DepartmentLit {
                key: "DAGANA",
                code: "01",
                name: "DAGANA",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "MBANE",
                        communes: &[("01", "MBANE"), ("02", "GAE"), ("03", "NDOMBO ALARAR")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "NDIAYE",
                        communes: &[
                            ("01", "DIAMA"),
                            ("02", "GNITH"),
                            ("03", "RONKH"),
                            ("04", "ROSS BETHIO"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "DAGANA",
                        communes: &[("01", "DAGANA"), ("02", "RICHARD TOLL"), ("03", "BOKHOL")],
                    },
                ],
            },
            DepartmentLit {
                key: "PODOR",
                code: "02",
                name: "PODOR",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "CASCAS",
                        communes: &[
                            ("01", "CASCAS"),
                            ("02", "DOUMGA LAO"),
                            ("03", "MBOUMBA"),
                            ("04", "MADINA NDIATHBE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "GAMADJI SARE",
                        communes: &[
                            ("01", "GAMADJI SARE"),
                            ("02", "DODEL"),
                            ("03", "GUEDE VILLAGE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SALDE",
                        communes: &[
                            ("01", "BOKE DIALLOUBE"),
                            ("02", "MBOLO BIRANE"),
                            ("03", "PETE"),
                            ("04", "GALOYA TOUCOULEUR"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "THILLE BOUBACAR",
                        communes: &[
                            ("01", "FANAYE"),
                            ("02", "NDIAYENE PENDAO"),
                            ("03", "NDIOUM"),
                            ("04", "THILLE BOUBACAR"),
                        ],
                    },
                ],
            },
            DepartmentLit {
                key: "SAINT-LOUIS",
                code: "03",
                name: "SAINT-LOUIS",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "RAO",
                        communes: &[
                            ("01", "FASS NGOM"),
                            ("02", "GANDON"),
                            ("03", "MPAL"),
                            ("04", "NDIEBENE GANDIOLE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "SAINT-LOUIS",
                        communes: &[("01", "SAINT-LOUIS")],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "TAMBACOUNDA",
        name: "Tambacounda",
        departments: &[
            DepartmentLit {
                key: "BAKEL",
                code: "01",
                name: "BAKEL",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "BELE",
                        communes: &[("01", "BELE"), ("02", "SINTHIOU FISSA")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "MOUDERY",
                        communes: &[("01", "MOUDERY"), ("02", "GABOU"), ("03", "BALLOU")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "KENIEBA",
                        communes: &[("01", "KENIEBA"), ("02", "MADINA FOULBE")],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "BAKEL",
                        communes: &[("01", "BAKEL"), ("02", "DIAWARA"), ("03", "KIDIRA")],
                    },
                ],
            },
            DepartmentLit {
                key: "GOUDIRY",
                code: "02",
                name: "GOUDIRY",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "BALA",
                        communes: &[("01", "BALA"), ("02", "GOUMBAYEL"), ("03", "KOAR")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "BOYNGUEL BAMBA",
                        communes: &[
                            ("01", "BOYNGUEL BAMBA"),
                            ("02", "DOUGUE"),
                            ("03", "KOUSSAN"),
                            ("04", "SINTHIOU MAMADOU BOUBOU"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "DIANKE MAKHA",
                        communes: &[
                            ("01", "DIANKE MAKHA"),
                            ("02", "BANI ISRAEL"),
                            ("03", "BOUTOUCOUFARA"),
                            ("04", "KOMOTI"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "KOULOR",
                        communes: &[
                            ("01", "KOULOR"),
                            ("02", "SINTHIOU BOCAR ALI"),
                            ("03", ""),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "GOUDIRY",
                        communes: &[("01", "GOUDIRY"), ("02", "KOTHIARY")],
                    },
                ],
            },
            DepartmentLit {
                key: "KOUPENTOUM",
                code: "03",
                name: "KOUPENTOUM",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "BAMBA THIALENE",
                        communes: &[
                            ("01", "BAMBA THIALENE"),
                            ("02", "KAHENE"),
                            ("03", "MERETO"),
                            ("04", "NDAM"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "KOUTHIABA WOLOF",
                        communes: &[
                            ("01", "KOUTHIABA WOLOF"),
                            ("02", "KOUTHIA GAIDY"),
                            ("03", "MALEME NIANI"),
                            ("04", "PAYAR"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "KOUPENTOUM",
                        communes: &[("01", "KOUPENTOUM")],
                    },
                ],
            },
            DepartmentLit {
                key: "TAMBACOUNDA",
                code: "04",
                name: "TAMBACOUNDA",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "KOUSSANAR",
                        communes: &[("01", "KOUSSANAR"), ("02", "SINTHIOU MALEME")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "MAKACOLIBANTANG",
                        communes: &[
                            ("01", "MAKACOLIBANTANG"),
                            ("02", "NDOGA BABACAR"),
                            ("03", "NIANI TOUCOULEUR"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "MISSIRAH",
                        communes: &[("01", "MISSIRAH"), ("02", "DIALACOTO"), ("03", "NETTEBOULOU")],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "TAMBACOUNDA",
                        communes: &[("01", "TAMBACOUNDA")],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "KAOLACK",
        name: "Kaolack",
        departments: &[
            DepartmentLit {
                key: "GUINGUINEO",
                code: "01",
                name: "GUINGUINEO",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "MBADAKHOUNE",
                        communes: &[
                            ("01", "MBADAKHOUNE"),
                            ("02", "DARA MBOSS"),
                            ("03", "NGAGNICK"),
                            ("04", "NGATHIE NAOUDE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "NGUELOU",
                        communes: &[
                            ("01", "NGUELOU"),
                            ("02", "FASS"),
                            ("03", "OUROUR"),
                            ("04", "PANAL WOLOF"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "GUINGUINEO",
                        communes: &[("01", "GUINGUINEO")],
                    },
                ],
            },
            DepartmentLit {
                key: "KAOLACK",
                code: "02",
                name: "KAOLACK",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "KOUMBAL",
                        communes: &[
                            ("01", "KOUMBAL"),
                            ("02", "KEUR BAKA"),
                            ("03", "LATMINGUE"),
                            ("04", "THIARE"),
                            ("05", "NDIAFFATE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "NDIEDIENG",
                        communes: &[
                            ("01", "NDIEDIENG"),
                            ("02", "DYA"),
                            ("03", "NDIEBEL"),
                            ("04", "THIOMBY"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "KAOLACK",
                        communes: &[("01", "KAOLACK"), ("02", "KAHONE")],
                    },
                ],
            },
            DepartmentLit {
                key: "NIORO-DU-RIP",
                code: "03",
                name: "NIORO DU RIP",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "MEDINA SABAKH",
                        communes: &[("01", "MEDINA SABAKH"), ("02", "KAYEMOR"), ("03", "NGAYENE")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "PAOSKOTO",
                        communes: &[
                            ("01", "PAOSKOTO"),
                            ("02", "DABALY"),
                            ("03", "DAROU SALAM"),
                            ("04", "GAINTHE KAYE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "WACK NGOUNA",
                        communes: &[
                            ("01", "WACK NGOUNA"),
                            ("02", "KEUR MABA DIAKHOU"),
                            ("03", "KEUR MADONGO"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "NIORO DU RIP",
                        communes: &[
                            ("01", "NIORO DU RIP"),
                            ("02", "KEUR MADIABEL"),
                            ("03", "POROKHANE"),
                        ],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "THIES",
        name: "Thiès",
        departments: &[
            DepartmentLit {
                key: "MBOUR",
                code: "01",
                name: "MBOUR",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "FISSEL",
                        communes: &[("01", "FISSEL"), ("02", "NDIAGANIAO")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "SESSENE",
                        communes: &[("01", "SESSENE"), ("02", "SANDIARA"), ("03", "NGUENIENE")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SINDIA",
                        communes: &[
                            ("01", "SINDIA"),
                            ("02", "DIASS"),
                            ("03", "MALICOUNDA"),
                            ("04", "POPENGUINE-NDAYANE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "MBOUR",
                        communes: &[
                            ("01", "MBOUR"),
                            ("02", "SALY PORTUDAL"),
                            ("03", "NGAPAROU"),
                            ("04", "SOMONE"),
                            ("05", "JOAL-FADIOUTH"),
                            ("06", "NGUEKOKH"),
                            ("07", "THIADIAYE"),
                        ],
                    },
                ],
            },
            DepartmentLit {
                key: "THIES",
                code: "02",
                name: "THIES",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "KEUR MOUSSA",
                        communes: &[
                            ("01", "KEUR MOUSSA"),
                            ("02", "DIENDER GUEDJ"),
                            ("03", "FANDENE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "THIENABA",
                        communes: &[
                            ("01", "THIENABA"),
                            ("02", "NGOUNDIANE"),
                            ("03", "NDIEYENE SIRAKH"),
                            ("04", "TOUBA TOUL"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "NOTTO",
                        communes: &[("01", "NOTTO DIOBASS"), ("02", "TASSETTE")],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "THIES",
                        communes: &[
                            ("01", "THIES EST"),
                            ("02", "THIES NORD"),
                            ("03", "THIES OUEST"),
                            ("04", "POUT"),
                            ("05", "KAYAR"),
                            ("06", "KHOMBOLE"),
                        ],
                    },
                ],
            },
            DepartmentLit {
                key: "TIVAOUANE",
                code: "03",
                name: "TIVAOUANE",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "MEOUANE",
                        communes: &[
                            ("01", "MEOUANE"),
                            ("02", "DAROU KHOUDOSS"),
                            ("03", "MBORO"),
                            ("04", "TAIBA NDIAYE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "MERINA DAKHAR",
                        communes: &[("01", "MERINA DAKHAR"), ("02", "KOUL"), ("03", "PEKESSE")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "NIAKHENE",
                        communes: &[
                            ("01", "NIAKHENE"),
                            ("02", "MBAYENE"),
                            ("03", "NGANDIAYE"),
                            ("04", "THILMAKHA"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "PAMBAL",
                        communes: &[
                            ("01", "PAMBAL"),
                            ("02", "CHERIF LO"),
                            ("03", "NOTTO GOUYE DIAMA"),
                            ("04", "PIRE GOUREYE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "05",
                        name: "TIVAOUANE",
                        communes: &[("01", "TIVAOUANE"), ("02", "MEKHE")],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "LOUGA",
        name: "Louga",
        departments: &[
            DepartmentLit {
                key: "KEBEMER",
                code: "01",
                name: "KEBEMER",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "DAROU MOUSTY",
                        communes: &[
                            ("01", "DAROU MOUSTY"),
                            ("02", "DAROU MARNANE"),
                            ("03", "MBACKE CADIOR"),
                            ("04", "NDOYENE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "NDANDE",
                        communes: &[
                            ("01", "NDANDE"),
                            ("02", "BANDEGNE OUOLOF"),
                            ("03", "DIOKOUL DIAWRIGNE"),
                            ("04", "KAB GAYE"),
                            ("05", "THIEP"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SAGATTA GUETH",
                        communes: &[
                            ("01", "SAGATTA GUETH"),
                            ("02", "KANENE NDIOB"),
                            ("03", "LORO"),
                            ("04", "NGOURANE OUOLOF"),
                            ("05", "THIOLOM FALL"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "KEBEMER",
                        communes: &[("01", "KEBEMER"), ("02", "GUEOUL")],
                    },
                ],
            },
            DepartmentLit {
                key: "LINGUERE",
                code: "02",
                name: "LINGUERE",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "BARKEDJI",
                        communes: &[
                            ("01", "BARKEDJI"),
                            ("02", "GASSANE"),
                            ("03", "THIARGNY"),
                            ("04", "THIEL"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "DODJI",
                        communes: &[("01", "DODJI"), ("02", "LABGAR"), ("03", "OUARKHOKH")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SAGATTA DJOLOF",
                        communes: &[
                            ("01", "SAGATTA DJOLOF"),
                            ("02", "BOULAL"),
                            ("03", "DEALY"),
                            ("04", "THIAMENE PASS"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "YANG-YANG",
                        communes: &[
                            ("01", "YANG-YANG"),
                            ("02", "KAMB"),
                            ("03", "MBEULEUKHE"),
                            ("04", "MBOULA"),
                            ("05", "TESSEKERE FORAGE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "05",
                        name: "LINGUERE",
                        communes: &[("01", "LINGUERE"), ("02", "DAHRA")],
                    },
                ],
            },
            DepartmentLit {
                key: "LOUGA",
                code: "03",
                name: "LOUGA",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "COKI",
                        communes: &[
                            ("01", "COKI"),
                            ("02", "GUET ARDO"),
                            ("03", "NDIAGNE"),
                            ("04", "PETE OUARACK"),
                            ("05", "THIAMENE CAYOR"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "KEUR MOMAR SARR",
                        communes: &[
                            ("01", "KEUR MOMAR SARR"),
                            ("02", "GANDE"),
                            ("03", "NGUER MALAL"),
                            ("04", "SYER"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "MBEDIENE",
                        communes: &[
                            ("01", "MBEDIENE"),
                            ("02", "KELLE GUEYE"),
                            ("03", "NGUIDILE"),
                            ("04", "NIOMRE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "SAKAL",
                        communes: &[("01", "SAKAL"), ("02", "LEONA"), ("03", "NGUEUNE SARR")],
                    },
                    ArrondissementLit {
                        code: "05",
                        name: "LOUGA",
                        communes: &[("01", "LOUGA")],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "FATICK",
        name: "Fatick",
        departments: &[
            DepartmentLit {
                key: "FATICK",
                code: "01",
                name: "FATICK",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "DIAKHAO",
                        communes: &[
                            ("01", "DIAKHAO"),
                            ("02", "DIAOULE"),
                            ("03", "MBELLACADIAO"),
                            ("04", "NDIOB"),
                            ("05", "THIARE NDIALGUI"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "FIMELA",
                        communes: &[
                            ("01", "FIMELA"),
                            ("02", "DJILASSE"),
                            ("03", "LOUL SESSENE"),
                            ("04", "PALMARIN FACAO"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "NIAKHAR",
                        communes: &[("01", "NIAKHAR"), ("02", "NGAYOKHEME"), ("03", "PATAR")],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "TATTAGUINE",
                        communes: &[("01", "TATTAGUINE"), ("02", "DIARRERE"), ("03", "DIOUROUP")],
                    },
                    ArrondissementLit {
                        code: "05",
                        name: "FATICK",
                        communes: &[("01", "FATICK"), ("02", "DIOFIOR")],
                    },
                ],
            },
            DepartmentLit {
                key: "FOUNDIOUGNE",
                code: "02",
                name: "FOUNDIOUGNE",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "DJILOR",
                        communes: &[("01", "DJILOR"), ("02", "DIOSSONG"), ("03", "DIAGANE BARKA")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "NIODIOR",
                        communes: &[("01", "NIODIOR"), ("02", "DIONEWAR"), ("03", "BASSOUL")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "TOUBACOUTA",
                        communes: &[
                            ("01", "TOUBACOUTA"),
                            ("02", "KEUR SALOUM DIANE"),
                            ("03", "KEUR SAMBA GUEYE"),
                            ("04", "NIORO ALASSANE TALL"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "FOUNDIOUGNE",
                        communes: &[
                            ("01", "FOUNDIOUGNE"),
                            ("02", "SOKONE"),
                            ("03", "KARANG POSTE"),
                            ("04", "PASSY"),
                        ],
                    },
                ],
            },
            DepartmentLit {
                key: "GOSSAS",
                code: "03",
                name: "GOSSAS",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "COLOBANE",
                        communes: &[("01", "COLOBANE"), ("02", "MBAR")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "OUADIOUR",
                        communes: &[("01", "OUADIOUR"), ("02", "PATAR LIA"), ("03", "NDIENE LAGANE")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "GOSSAS",
                        communes: &[("01", "GOSSAS")],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "KOLDA",
        name: "Kolda",
        departments: &[
            DepartmentLit {
                key: "KOLDA",
                code: "01",
                name: "KOLDA",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "DABO",
                        communes: &[
                            ("01", "DABO"),
                            ("02", "BAGADADJI"),
                            ("03", "COUMBACARA"),
                            ("04", "MAMPATIM"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "DIOULACOLON",
                        communes: &[
                            ("01", "DIOULACOLON"),
                            ("02", "GUIRO YERO BOCAR"),
                            ("03", "MEDINA EL HADJI"),
                            ("04", "TANKANTO ESCALE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SARE BIDJI",
                        communes: &[
                            ("01", "SARE BIDJI"),
                            ("02", "SALIKEGNE"),
                            ("03", "SARE YOBA DIEGA"),
                            ("04", "THIETTY"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "KOLDA",
                        communes: &[("01", "KOLDA"), ("02", "DIALAMBERE")],
                    },
                ],
            },
            DepartmentLit {
                key: "MEDINA-YORO-FOULAH",
                code: "02",
                name: "MEDINA YORO FOULAH",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "FAFACOUROU",
                        communes: &[("01", "FAFACOUROU"), ("02", "BADION"), ("03", "BIGNARABE")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "NIAMING",
                        communes: &[("01", "NIAMING"), ("02", "DINGUIRAYE"), ("03", "KEREWANE")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "NDORNA",
                        communes: &[("01", "NDORNA"), ("02", "BOUROUCO"), ("03", "KOULINTO")],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "MEDINA YORO FOULAH",
                        communes: &[("01", "MEDINA YORO FOULAH"), ("02", "PATA")],
                    },
                ],
            },
            DepartmentLit {
                key: "VELINGARA",
                code: "03",
                name: "VELINGARA",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "BONCONTO",
                        communes: &[
                            ("01", "BONCONTO"),
                            ("02", "LINKERING"),
                            ("03", "MEDINA GOUNASS"),
                            ("04", "SINTHIANG KOUNDARA"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "PAKOUR",
                        communes: &[("01", "PAKOUR"), ("02", "OUASSADOU"), ("03", "PAROUMBA")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SARE COLY SALLE",
                        communes: &[
                            ("01", "SARE COLY SALLE"),
                            ("02", "KANDIA"),
                            ("03", "KANDIAYE"),
                            ("04", "NEMATABA"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "VELINGARA",
                        communes: &[
                            ("01", "VELINGARA"),
                            ("02", "DIAOBE-KABENDOU"),
                            ("03", "KOUNKANE"),
                        ],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "MATAM",
        name: "Matam",
        departments: &[
            DepartmentLit {
                key: "KANEL",
                code: "01",
                name: "KANEL",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "ORKADIERE",
                        communes: &[("01", "ORKADIERE"), ("02", "AOURE"), ("03", "BOKILADJI")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "WOURO SIDY",
                        communes: &[("01", "WOURO SIDY"), ("02", "NDENDORY"), ("03", "ODOBERE")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "KANEL",
                        communes: &[
                            ("01", "KANEL"),
                            ("02", "DEMBANCANE"),
                            ("03", "HAMADY OUNARE"),
                            ("04", "SEMME"),
                            ("05", "WAOUNDE"),
                        ],
                    },
                ],
            },
            DepartmentLit {
                key: "MATAM",
                code: "02",
                name: "MATAM",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "AGNAM CIVOL",
                        communes: &[("01", "AGNAM CIVOL"), ("02", "DABIA"), ("03", "OREFONDE")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "OGO",
                        communes: &[("01", "OGO"), ("02", "BOKIDIAWE"), ("03", "NABADJI CIVOL")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "MATAM",
                        communes: &[
                            ("01", "MATAM"),
                            ("02", "OUROSSOGUI"),
                            ("03", "NGUIDJILONE"),
                            ("04", "THILOGNE"),
                        ],
                    },
                ],
            },
            DepartmentLit {
                key: "RANEROU-FERLO",
                code: "03",
                name: "RANEROU FERLO",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "VELINGARA",
                        communes: &[("01", "VELINGARA"), ("02", "OUDALAYE")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "LOUGRE THIOLLY",
                        communes: &[("01", "LOUGRE THIOLLY")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "RANEROU",
                        communes: &[("01", "RANEROU")],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "KAFFRINE",
        name: "Kaffrine",
        departments: &[
            DepartmentLit {
                key: "BIRKELANE",
                code: "01",
                name: "BIRKELANE",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "KEUR MBOUCKI",
                        communes: &[("01", "KEUR MBOUCKI"), ("02", "DIAMAL"), ("03", "TOUBA MBELLA")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "MABO",
                        communes: &[("01", "MABO"), ("02", "NDIOGNICK"), ("03", "SEGRE GATTA")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "BIRKELANE",
                        communes: &[("01", "BIRKELANE")],
                    },
                ],
            },
            DepartmentLit {
                key: "KAFFRINE",
                code: "02",
                name: "KAFFRINE",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "GNIBY",
                        communes: &[("01", "GNIBY"), ("02", "BOULEL"), ("03", "KAHI")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "KATHIOTE",
                        communes: &[
                            ("01", "KATHIOTE"),
                            ("02", "DIOKOUL MBELBOUCK"),
                            ("03", "MEDINATOUL SALAM 2"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "KAFFRINE",
                        communes: &[("01", "KAFFRINE"), ("02", "NGANDA")],
                    },
                ],
            },
            DepartmentLit {
                key: "KOUNGHEUL",
                code: "03",
                name: "KOUNGHEUL",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "IDA MOURIDE",
                        communes: &[("01", "IDA MOURIDE"), ("02", "SALY ESCALE"), ("03", "RIBOT ESCALE")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "LOUR ESCALE",
                        communes: &[("01", "LOUR ESCALE"), ("02", "MISSIRAH WADENE"), ("03", "MAKA YOP")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "KOUNGHEUL",
                        communes: &[("01", "KOUNGHEUL"), ("02", "FASS THIEKENE"), ("03", "GAINTE PATHE")],
                    },
                ],
            },
            DepartmentLit {
                key: "MALEM-HODDAR",
                code: "04",
                name: "MALEM HODDAR",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "DAROU MINAME II",
                        communes: &[("01", "DAROU MINAME II"), ("02", "KHELCOM")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "SAGNA",
                        communes: &[
                            ("01", "SAGNA"),
                            ("02", "DIANKE SOUF"),
                            ("03", "NDIOBENE SAMBA LAMO"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "MALEM HODDAR",
                        communes: &[("01", "MALEM HODDAR")],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "KEDOUGOU",
        name: "Kédougou",
        departments: &[
            DepartmentLit {
                key: "KEDOUGOU",
                code: "01",
                name: "KEDOUGOU",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "BANDAFASSI",
                        communes: &[("01", "BANDAFASSI"), ("02", "DINDEFELO"), ("03", "TOMBORONKOTO")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "FONGOLEMBI",
                        communes: &[("01", "FONGOLEMBI"), ("02", "DIMBOLI")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "KEDOUGOU",
                        communes: &[("01", "KEDOUGOU")],
                    },
                ],
            },
            DepartmentLit {
                key: "SALEMATA",
                code: "02",
                name: "SALEMATA",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "DAKATELI",
                        communes: &[("01", "DAKATELI"), ("02", "KEVOYE")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "DAR SALAM",
                        communes: &[("01", "DAR SALAM"), ("02", "ETHIOLO"), ("03", "OUBADJI")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SALEMATA",
                        communes: &[("01", "SALEMATA")],
                    },
                ],
            },
            DepartmentLit {
                key: "SARAYA",
                code: "03",
                name: "SARAYA",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "BEMBOU",
                        communes: &[("01", "BEMBOU"), ("02", "MEDINA BAFFE")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "SABODALA",
                        communes: &[("01", "SABODALA"), ("02", "KHOSSANTO"), ("03", "MISSIRAH SIRIMANA")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SARAYA",
                        communes: &[("01", "SARAYA")],
                    },
                ],
            },
        ],
    },
    RegionLit {
        code: "SEDHIOU",
        name: "Sédhiou",
        departments: &[
            DepartmentLit {
                key: "BOUNKILING",
                code: "01",
                name: "BOUNKILING",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "BOGHAL",
                        communes: &[("01", "BOGHAL"), ("02", "DJINANY"), ("03", "NDIAMACOUTA")],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "BONA",
                        communes: &[
                            ("01", "BONA"),
                            ("02", "DIAMBATY"),
                            ("03", "DIAROUME"),
                            ("04", "INOR"),
                        ],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "BOUNKILING",
                        communes: &[("01", "BOUNKILING"), ("02", "MADINA WANDIFA")],
                    },
                ],
            },
            DepartmentLit {
                key: "GOUDOMP",
                code: "02",
                name: "GOUDOMP",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "DJIBANAR",
                        communes: &[
                            ("01", "DJIBANAR"),
                            ("02", "KAOUR"),
                            ("03", "MANGAROUNGOU SANTO"),
                            ("04", "SIMBANDI BALANTE"),
                            ("05", "YARANG BALANTE"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "KARANTABA",
                        communes: &[("01", "KARANTABA"), ("02", "KOLIBANTANG")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SIMBANDI BRASSOU",
                        communes: &[
                            ("01", "SIMBANDI BRASSOU"),
                            ("02", "BAGHERE"),
                            ("03", "DIOUDOUBOU"),
                            ("04", "NIAGHA"),
                        ],
                    },
                    ArrondissementLit {
                        code: "04",
                        name: "GOUDOMP",
                        communes: &[("01", "GOUDOMP"), ("02", "SAMINE"), ("03", "TANAFF")],
                    },
                ],
            },
            DepartmentLit {
                key: "SEDHIOU",
                code: "03",
                name: "SEDHIOU",
                arrondissements: &[
                    ArrondissementLit {
                        code: "01",
                        name: "DIENDE",
                        communes: &[
                            ("01", "DIENDE"),
                            ("02", "BAMBALI"),
                            ("03", "DJIREDJI"),
                            ("04", "KOUSSY"),
                            ("05", "OUDOUCAR"),
                            ("06", "SAKAR"),
                        ],
                    },
                    ArrondissementLit {
                        code: "02",
                        name: "DJIBABOUYA",
                        communes: &[("01", "DJIBABOUYA"), ("02", "BEMET BIDJINI"), ("03", "SANSAMBA")],
                    },
                    ArrondissementLit {
                        code: "03",
                        name: "SEDHIOU",
                        communes: &[("01", "SEDHIOU"), ("02", "DIANNAH MALARY"), ("03", "MARSASSOUM")],
                    },
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_preserves_declaration_order() {
        let source = source();
        assert_eq!(source.country, COUNTRY);
        assert_eq!(source.regions.len(), 14);
        assert_eq!(source.regions[0].code, "DAKAR");
        assert_eq!(source.regions[1].code, "ZIGUINCHOR");
        assert_eq!(source.regions[13].code, "SEDHIOU");
        assert_eq!(source.regions[0].departments[1].key.as_deref(), Some("PIKINE"));
    }
}
