//! Prefabricated bodies and solar systems.

pub mod bodies {
    use simulator::bodies::{Body, Facts, Kind, Satellite};

    fn facts(diameter: &str, temp: &str, day_length: &str, year_length: &str, fun_fact: &str) -> Facts {
        Facts {
            diameter: diameter.to_string(),
            temp: temp.to_string(),
            day_length: day_length.to_string(),
            year_length: year_length.to_string(),
            fun_fact: fun_fact.to_string(),
        }
    }

    fn moon(name: &str, radius: f64, distance: f64, speed: f64, color: u32, description: &str) -> Satellite {
        Satellite {
            name: name.to_string(),
            distance,
            speed,
            radius,
            color,
            description: description.to_string(),
        }
    }

    // THE STAR

    /// Returns our Sun. Will not move.
    pub fn matahari() -> Body {
        Body {
            name: "Matahari".to_string(),
            kind: Kind::Star,
            distance: 0.0,
            eccentricity: 0.0,
            speed: 0.0,
            radius: 25.0,
            color: 0xFDB813,
            colors: vec![0xFFFFFF, 0xFDB813, 0xFF8C00, 0xFF4500], // core to corona
            ring: false,
            atmosphere: false,
            satellites: Vec::new(),
            description: "Matahari adalah bintang Tipe G (Yellow Dwarf) di pusat Tata Surya. \
                Suhunya mencapai 15 juta derajat Celsius di inti. Massanya menyumbang 99,86% \
                dari total massa tata surya, mengikat semua planet dengan gravitasinya."
                .to_string(),
            facts: facts(
                "1.392.700 km",
                "5.500°C (Fotosfer)",
                "25-35 Hari (Rotasi Diferensial)",
                "230 Juta Tahun (Orbit Galaksi)",
                "Cahaya Matahari butuh 8 menit 20 detik untuk sampai ke Bumi.",
            ),
        }
    }

    // PLANETS

    /// Returns Mercury. The most eccentric of the real planets.
    pub fn merkurius() -> Body {
        Body {
            name: "Merkurius".to_string(),
            kind: Kind::Planet,
            distance: 0.39,
            eccentricity: 0.205,
            speed: 4.1,
            radius: 4.0,
            color: 0xA5A5A5,
            colors: vec![0xEBEBEB, 0xA5A5A5, 0x707070],
            ring: false,
            atmosphere: false,
            satellites: Vec::new(),
            description: "Planet terdekat dengan Matahari. Permukaannya berlubang-lubang akibat \
                meteorit, mirip Bulan. Karena tidak memiliki atmosfer yang berarti, suhu ekstrem \
                terjadi antara siang (430°C) dan malam (-180°C)."
                .to_string(),
            facts: facts(
                "4.879 km",
                "-173°C hingga 427°C",
                "58,6 Hari Bumi",
                "88 Hari Bumi",
                "Orbit Merkurius adalah yang paling eksentrik (lonjong) dari semua planet utama.",
            ),
        }
    }

    /// Returns Venus. Cloudy enough to glow.
    pub fn venus() -> Body {
        Body {
            name: "Venus".to_string(),
            kind: Kind::Planet,
            distance: 0.72,
            eccentricity: 0.007,
            speed: 1.6,
            radius: 7.0,
            color: 0xE3BB76,
            colors: vec![0xFDF0D5, 0xE3BB76, 0xC79D55],
            ring: false,
            atmosphere: true,
            satellites: Vec::new(),
            description: "Diselimuti awan asam sulfat tebal yang memantulkan cahaya matahari, \
                menjadikannya objek paling terang kedua di langit malam. Efek rumah kaca yang tak \
                terkendali membuatnya menjadi planet terpanas."
                .to_string(),
            facts: facts(
                "12.104 km",
                "462°C (Konstan)",
                "243 Hari Bumi (Retrograde)",
                "225 Hari Bumi",
                "Venus berotasi dari timur ke barat, kebalikan dari planet lainnya.",
            ),
        }
    }

    /// Returns the Earth, with the Moon attached.
    pub fn bumi() -> Body {
        Body {
            name: "Bumi".to_string(),
            kind: Kind::Planet,
            distance: 1.0,
            eccentricity: 0.017,
            speed: 1.0,
            radius: 7.5,
            color: 0x2255AA,
            // ocean, shallows, atmosphere, a hint of land
            colors: vec![0x1A3B70, 0x2E66A5, 0x4B90D6, 0x68A86C],
            ring: false,
            atmosphere: true,
            satellites: vec![moon(
                "Bulan",
                2.0,
                14.0,
                12.0,
                0xCFCFCF,
                "Terkunci secara pasang surut dengan Bumi, sehingga selalu memperlihatkan wajah yang sama.",
            )],
            description: "Satu-satunya planet yang diketahui menunjang kehidupan. Memiliki \
                atmosfer kaya nitrogen dan oksigen, serta medan magnet kuat yang melindunginya \
                dari radiasi surya."
                .to_string(),
            facts: facts(
                "12.742 km",
                "14°C (Rata-rata)",
                "23 Jam 56 Menit",
                "365,25 Hari",
                "Bumi adalah planet dengan densitas (kepadatan) tertinggi di Tata Surya.",
            ),
        }
    }

    /// Returns Mars, with Phobos and Deimos.
    pub fn mars() -> Body {
        Body {
            name: "Mars".to_string(),
            kind: Kind::Planet,
            distance: 1.52,
            eccentricity: 0.094,
            speed: 0.53,
            radius: 5.0,
            color: 0xD14A28,
            colors: vec![0xE27B58, 0xC1440E, 0x8B3015],
            ring: false,
            atmosphere: false,
            satellites: vec![
                moon("Phobos", 0.9, 9.0, 18.0, 0xAA9988, "Bulan berbentuk kentang yang mengorbit sangat dekat."),
                moon("Deimos", 0.7, 14.0, 14.0, 0x998877, "Lebih kecil dan lebih jauh dari Phobos."),
            ],
            description: "Planet berdebu dan dingin dengan atmosfer tipis karbon dioksida. Warna \
                merahnya berasal dari oksida besi (karat) di permukaannya. Memiliki ngarai Valles \
                Marineris yang membentang sejarak Los Angeles ke New York."
                .to_string(),
            facts: facts(
                "6.779 km",
                "-63°C (Rata-rata)",
                "24 Jam 37 Menit",
                "687 Hari Bumi",
                "Memiliki Olympus Mons, gunung berapi setinggi 21 km, tiga kali tinggi Everest.",
            ),
        }
    }

    /// Returns Jupiter and the Galilean moons.
    pub fn jupiter() -> Body {
        Body {
            name: "Jupiter".to_string(),
            kind: Kind::Planet,
            distance: 5.2,
            eccentricity: 0.049,
            speed: 0.084,
            radius: 18.0,
            color: 0xD9A066,
            colors: vec![0xE3DCCB, 0xD9A066, 0xC88B3A, 0xA16A38], // bands
            ring: false,
            atmosphere: false,
            satellites: vec![
                moon("Io", 1.5, 24.0, 8.0, 0xD4C06A, "Vulkanik aktif."),
                moon("Europa", 1.3, 30.0, 6.0, 0xB8C9D9, "Permukaan es dengan lautan di bawahnya."),
                moon("Ganymede", 2.0, 38.0, 4.0, 0x8E8276, "Bulan terbesar."),
                moon("Callisto", 1.8, 46.0, 2.0, 0x63584F, "Permukaan berkawah tua."),
            ],
            description: "Raksasa gas yang didominasi hidrogen dan helium. Tidak memiliki \
                permukaan padat. Pola awan ikoniknya disebabkan oleh angin kencang yang bertiup \
                berlawanan arah (zona dan sabuk)."
                .to_string(),
            facts: facts(
                "139.820 km",
                "-108°C",
                "9 Jam 56 Menit",
                "11,86 Tahun Bumi",
                "Jupiter menyusut sekitar 2 cm setiap tahun karena memancarkan lebih banyak panas \
                 daripada yang diterima dari Matahari.",
            ),
        }
    }

    /// Returns Saturn, rings and all.
    pub fn saturnus() -> Body {
        Body {
            name: "Saturnus".to_string(),
            kind: Kind::Planet,
            distance: 9.58,
            eccentricity: 0.056,
            speed: 0.034,
            radius: 15.0,
            color: 0xEDD59E,
            colors: vec![0xF4E2B5, 0xEDD59E, 0xD4C28D],
            ring: true,
            atmosphere: false,
            satellites: vec![
                moon("Titan", 1.9, 38.0, 3.0, 0xD9B850, "Memiliki atmosfer tebal dan danau metana."),
                moon("Rhea", 1.0, 26.0, 5.0, 0xAFAFAF, "Bulan es yang padat."),
            ],
            description: "Permata tata surya dengan sistem cincin yang kompleks. Cincinnya terdiri \
                dari miliaran partikel es dan batuan, mulai dari ukuran debu hingga sebesar rumah."
                .to_string(),
            facts: facts(
                "116.460 km",
                "-139°C",
                "10 Jam 42 Menit",
                "29,45 Tahun Bumi",
                "Angin di Saturnus bisa mencapai kecepatan 1.800 km/jam, jauh lebih cepat daripada \
                 di Jupiter.",
            ),
        }
    }

    /// Returns Uranus.
    pub fn uranus() -> Body {
        Body {
            name: "Uranus".to_string(),
            kind: Kind::Planet,
            distance: 19.22,
            eccentricity: 0.046,
            speed: 0.011,
            radius: 10.0,
            color: 0x93B8BE,
            colors: vec![0xD1F2F5, 0x93B8BE, 0x6DA1A8],
            ring: false,
            atmosphere: false,
            satellites: vec![
                moon("Titania", 1.1, 22.0, 4.0, 0xC0C0C0, "Bulan terbesar Uranus."),
                moon("Oberon", 1.0, 28.0, 3.0, 0xA0A0A0, "Bulan terjauh."),
            ],
            description: "Raksasa es dengan atmosfer yang mengandung air, amonia, dan metana. \
                Suhunya sangat dingin dan merupakan planet dengan atmosfer terdingin di tata surya."
                .to_string(),
            facts: facts(
                "50.724 km",
                "-197°C",
                "17 Jam 14 Menit",
                "84 Tahun Bumi",
                "Berotasi menyamping (kemiringan sumbu 98°), mungkin akibat tabrakan besar di masa lalu.",
            ),
        }
    }

    /// Returns Neptune. Triton goes the wrong way round.
    pub fn neptunus() -> Body {
        Body {
            name: "Neptunus".to_string(),
            kind: Kind::Planet,
            distance: 30.05,
            eccentricity: 0.009,
            speed: 0.006,
            radius: 10.0,
            color: 0x3E54E8,
            colors: vec![0x5D73F3, 0x3E54E8, 0x2A3BA8],
            ring: false,
            atmosphere: false,
            satellites: vec![moon(
                "Triton",
                1.4,
                22.0,
                -4.0,
                0xD1E2EA,
                "Mengorbit berlawanan arah (retrograde).",
            )],
            description: "Planet terjauh ini berwarna biru tua pekat karena metana. Memiliki \
                sistem cuaca yang sangat dinamis dengan badai gelap yang muncul dan menghilang."
                .to_string(),
            facts: facts(
                "49.244 km",
                "-201°C",
                "16 Jam 6 Menit",
                "164,8 Tahun Bumi",
                "Gravitasi Neptunus mengganggu orbit Uranus, yang menjadi petunjuk bagi penemuannya.",
            ),
        }
    }

    // SMALL STUFF

    /// Returns Pluto and Charon. Not a planet any more, sorry.
    pub fn pluto() -> Body {
        Body {
            name: "Pluto".to_string(),
            kind: Kind::Dwarf,
            distance: 39.48,
            eccentricity: 0.248,
            speed: 0.004,
            radius: 3.0,
            color: 0xC2A68C,
            colors: vec![0xE8D8C8, 0xC2A68C, 0x8C7060],
            ring: false,
            atmosphere: false,
            satellites: vec![moon(
                "Charon",
                1.2,
                8.0,
                6.0,
                0x9A9A9A,
                "Sangat besar dibanding Pluto sehingga keduanya mengorbit titik di antara mereka.",
            )],
            description: "Planet kerdil di Sabuk Kuiper. Permukaannya berupa es nitrogen dengan \
                dataran berbentuk hati yang terkenal, Tombaugh Regio."
                .to_string(),
            facts: facts(
                "2.377 km",
                "-229°C",
                "6,4 Hari Bumi",
                "248 Tahun Bumi",
                "Pluto diturunkan statusnya menjadi planet kerdil pada tahun 2006.",
            ),
        }
    }

    /// Returns Halley's Comet. Very eccentric, only shows off its tail near the Sun.
    pub fn komet_halley() -> Body {
        Body {
            name: "Komet Halley".to_string(),
            kind: Kind::Comet,
            distance: 17.8,
            eccentricity: 0.967,
            speed: 0.0133,
            radius: 3.0,
            color: 0xBFE3FF,
            colors: vec![0xFFFFFF, 0xBFE3FF, 0x6FA8DC],
            ring: false,
            atmosphere: false,
            satellites: Vec::new(),
            description: "Komet periodik paling terkenal. Intinya berupa bola salju kotor yang \
                menguap menjadi ekor panjang saat mendekati Matahari."
                .to_string(),
            facts: facts(
                "11 km (Inti)",
                "-70°C hingga 77°C",
                "2,2 Hari Bumi",
                "75-76 Tahun Bumi",
                "Komet Halley akan kembali terlihat dari Bumi pada tahun 2061.",
            ),
        }
    }
}

pub mod systems {
    use crate::prefabs::bodies;
    use simulator::bodies::Catalogue;

    /// Our own solar system, in render order.
    pub fn tata_surya() -> Catalogue {
        Catalogue::new(vec![
            bodies::matahari(),
            bodies::merkurius(),
            bodies::venus(),
            bodies::bumi(),
            bodies::mars(),
            bodies::jupiter(),
            bodies::saturnus(),
            bodies::uranus(),
            bodies::neptunus(),
            bodies::pluto(),
            bodies::komet_halley(),
        ])
    }

    /// Just the Sun, the Earth and the Moon.
    pub fn bumi_bulan() -> Catalogue {
        Catalogue::new(vec![bodies::matahari(), bodies::bumi()])
    }
}
