mod scaling {
    use crate::cmm::cmm_luminance::{
        decode_chromaticity, decode_min_luminance, encode_chromaticity, encode_min_luminance,
    };

    #[test]
    fn chromaticity_wire_scale() {
        assert_eq!(decode_chromaticity(0), 0.0);
        assert_eq!(decode_chromaticity(313_000), 0.313);
        assert_eq!(decode_chromaticity(1_000_000), 1.0);
        assert_eq!(encode_chromaticity(0.64), 640_000);
        assert_eq!(encode_chromaticity(0.0), 0);
    }

    #[test]
    fn chromaticity_round_trip() {
        for c in [0.0, 0.0001, 0.046, 0.3127, 0.64, 0.7654321, 1.0] {
            let back = decode_chromaticity(encode_chromaticity(c));
            assert!((back - c).abs() <= 0.0000005, "{} came back as {}", c, back);
        }
    }

    #[test]
    fn min_luminance_wire_scale() {
        // Only the minimum is scaled. Maximum and reference luminance travel
        // as plain nits.
        assert_eq!(decode_min_luminance(0), 0.0);
        assert_eq!(decode_min_luminance(2000), 0.2);
        assert_eq!(encode_min_luminance(0.2), 2000);
        assert_eq!(encode_min_luminance(10.0), 100_000);
    }

    #[test]
    fn min_luminance_round_trip() {
        for nits in [0.0, 0.0001, 0.005, 0.2, 1.0, 4.9999] {
            let back = decode_min_luminance(encode_min_luminance(nits));
            assert!(
                (back - nits).abs() <= 0.00005,
                "{} came back as {}",
                nits,
                back
            );
        }
    }
}

mod codes {
    use crate::cmm::{cmm_primaries::NamedPrimaries, cmm_transfer_function::TransferFunction};

    #[test]
    fn transfer_functions_round_trip() {
        let all = [
            TransferFunction::Bt1886,
            TransferFunction::Gamma22,
            TransferFunction::Gamma28,
            TransferFunction::St240,
            TransferFunction::ExtLinear,
            TransferFunction::Log100,
            TransferFunction::Log316,
            TransferFunction::Xvycc,
            TransferFunction::Srgb,
            TransferFunction::ExtSrgb,
            TransferFunction::St2084Pq,
            TransferFunction::St428,
            TransferFunction::Hlg,
        ];
        for tf in all {
            assert_eq!(TransferFunction::from_code(tf.code()), Some(tf));
        }
        assert_eq!(TransferFunction::from_code(0), None);
        assert_eq!(TransferFunction::from_code(14), None);
    }

    #[test]
    fn primaries_round_trip() {
        let all = [
            NamedPrimaries::Srgb,
            NamedPrimaries::PalM,
            NamedPrimaries::Pal,
            NamedPrimaries::Ntsc,
            NamedPrimaries::GenericFilm,
            NamedPrimaries::Bt2020,
            NamedPrimaries::Cie1931Xyz,
            NamedPrimaries::DciP3,
            NamedPrimaries::DisplayP3,
            NamedPrimaries::AdobeRgb,
        ];
        for primaries in all {
            assert_eq!(NamedPrimaries::from_code(primaries.code()), Some(primaries));
        }
        assert_eq!(NamedPrimaries::from_code(0), None);
        assert_eq!(NamedPrimaries::from_code(11), None);
    }

    #[test]
    fn labels() {
        assert_eq!(TransferFunction::Gamma22.label(), "gamma 2.2 (sRGB)");
        assert_eq!(TransferFunction::St2084Pq.label(), "PQ (HDR10)");
        // Everything the viewer cannot request renders as unknown.
        assert_eq!(TransferFunction::Srgb.label(), "unknown");
        assert_eq!(TransferFunction::Hlg.label(), "unknown");
        assert_eq!(TransferFunction::Bt1886.label(), "unknown");
    }
}

mod summary {
    use crate::cmm::{
        cmm_attributes::DescriptionAttributes,
        cmm_luminance::{Luminance, TargetLuminance},
        cmm_primaries::{Chromaticity, Primaries},
        cmm_transfer_function::TransferFunction,
    };

    fn hdr10_attributes() -> DescriptionAttributes {
        DescriptionAttributes {
            primaries: Primaries {
                r: Chromaticity { x: 0.708, y: 0.292 },
                g: Chromaticity { x: 0.170, y: 0.797 },
                b: Chromaticity { x: 0.131, y: 0.046 },
                wp: Chromaticity {
                    x: 0.3127,
                    y: 0.329,
                },
            },
            transfer_function: Some(TransferFunction::St2084Pq),
            luminance: Luminance {
                min: 0.2,
                max: 1000.0,
                reference: 203.0,
            },
            target_luminance: TargetLuminance {
                min: 0.01,
                max: 600.0,
            },
            ..Default::default()
        }
    }

    #[test]
    fn hdr10_summary() {
        let expected = "\nColor Primaries:\
                        \n  Red:   0.708, 0.292\
                        \n  Green: 0.170, 0.797\
                        \n  Blue:  0.131, 0.046\
                        \n  White: 0.313, 0.329\
                        \nTransfer Function: PQ (HDR10)\
                        \nLuminance Range: [0.20, 1000.00] nits\
                        \nReference Luminance: 203.00 nits\
                        \nTarget Range: [0.01, 600.00] nits";
        assert_eq!(hdr10_attributes().summary(), expected);
    }

    #[test]
    fn unlabeled_transfer_functions_render_as_unknown() {
        let mut attributes = hdr10_attributes();
        attributes.transfer_function = None;
        assert!(attributes.summary().contains("Transfer Function: unknown"));
        attributes.transfer_function = Some(TransferFunction::Hlg);
        assert!(attributes.summary().contains("Transfer Function: unknown"));
    }

    #[test]
    fn empty_attributes_still_render() {
        let summary = DescriptionAttributes::default().summary();
        assert!(summary.contains("Red:   0.000, 0.000"));
        assert!(summary.contains("Transfer Function: unknown"));
        assert!(summary.contains("Luminance Range: [0.00, 0.00] nits"));
    }
}
