mod dice;
pub mod error;
pub mod parser;
mod pouch;
pub mod roll;
mod term;

pub use dice::limits;
pub use dice::DiceGroup;
pub use pouch::Pouch;
pub use term::Bonus;
pub use term::Term;

/// Build a pouch from a notation such as `2d6+1d8-3`, never fails
pub fn parse_pouch(src: &str) -> Pouch {
    Pouch::new(src)
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::limits;
    use crate::parse_pouch;
    use crate::roll::Source;
    use crate::Bonus;
    use crate::DiceGroup;
    use crate::Pouch;
    use crate::Term;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub struct MockIter<'a, T: Iterator<Item = u64>> {
        pub iter: &'a mut T,
    }

    impl<T: Iterator<Item = u64>> Source for MockIter<'_, T> {
        fn throw(&mut self, sides: u64) -> u64 {
            match self.iter.next() {
                Some(value) => {
                    if value > sides {
                        panic!("Tried to return {} for a {} sided dice", value, sides)
                    }
                    value
                }
                None => panic!("Iterator out of values"),
            }
        }
    }

    fn partials_len(pouch: &Pouch) -> Vec<usize> {
        pouch
            .terms()
            .iter()
            .map(|t| t.partials().map_or(0, |p| p.len()))
            .collect()
    }

    #[test]
    fn bonus_test() {
        let mut b = Term::Bonus(Bonus::new(2));
        assert_eq!(2, b.total());
        b.roll();
        b.roll();
        assert_eq!(2, b.total());
        assert_eq!(None, b.partials());
    }

    #[test]
    fn dice_test() {
        let mut d = DiceGroup::new(true, 1, 8).unwrap();
        assert_eq!(0, d.total());
        assert!(d.results().is_empty());
        d.roll();
        assert!((1..=8).contains(&d.total()));
    }

    #[test]
    fn dice_neg_test() {
        let mut d = DiceGroup::new(false, 1, 8).unwrap();
        assert_eq!(0, d.total());
        d.roll();
        assert!((-8..=-1).contains(&d.total()));
    }

    #[test]
    fn dice_invalid_test() {
        assert!(matches!(DiceGroup::new(true, 0, 6), Err(Error::ZeroQuantity)));
        assert!(matches!(DiceGroup::new(true, 2, 0), Err(Error::ZeroFaces)));
        assert!(matches!(
            DiceGroup::new(true, limits::MAX_DICE_AMOUNT + 1, 6),
            Err(Error::Limit(_))
        ));
        assert!(matches!(
            DiceGroup::new(false, 1, u64::MAX),
            Err(Error::Limit(_))
        ));
    }

    #[test]
    fn largest_dice_stay_positive_test() {
        let mut p = parse_pouch("5000d5000 + 1d18446744073709551615");
        assert_eq!(1, p.len());
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..5 {
            p.roll_with(&mut rng);
            assert!((5000..=25_000_000).contains(&p.total()));
        }
    }

    #[test]
    fn huge_bonuses_saturate_test() {
        let mut p = parse_pouch("9223372036854775807 + 9223372036854775807 + d6");
        p.roll();
        assert_eq!(i64::MAX, p.total());
        let p = parse_pouch("-9223372036854775808 - 9223372036854775807");
        assert_eq!(i64::MIN, p.total());
    }

    #[test]
    fn unrolled_partials_test() {
        let t = Term::Dice(DiceGroup::new(true, 3, 6).unwrap());
        assert_eq!(Some(&[] as &[u64]), t.partials());
    }

    #[test]
    fn single_dice_pouch_test() {
        for src in ["1d8", "d8"] {
            let mut p = parse_pouch(src);
            assert_eq!(0, p.total());
            p.roll();
            assert!((1..=8).contains(&p.total()));
        }
        for src in ["-1d8", "-d8"] {
            let mut p = parse_pouch(src);
            p.roll();
            assert!((-8..=-1).contains(&p.total()));
        }
    }

    #[test]
    fn pouch_test() {
        let mut p = parse_pouch("d8-1-2d6+2");
        assert_eq!(4, p.len());
        p.roll();
        assert_eq!(vec![1, 0, 2, 0], partials_len(&p));
        eprintln!("{}", p);
    }

    #[test]
    fn pouch_three_terms_test() {
        let mut p = parse_pouch("2d8+1d6+2");
        assert_eq!(3, p.len());
        assert!(p.terms()[2].as_bonus().is_some());
        p.roll();
        assert_eq!(vec![2, 1, 0], partials_len(&p));
    }

    #[test]
    fn empty_pouch_test() {
        let mut p = parse_pouch("");
        assert!(p.is_empty());
        p.roll();
        assert_eq!(0, p.total());
        assert_eq!(1, p.render().lines().filter(|l| l.starts_with("Total")).count());
    }

    #[test]
    fn scripted_total_test() {
        let mut p = parse_pouch("2d6 + 1d8 - 3");
        let roll_mock = vec![3, 5, 7];
        p.roll_with_source(&mut MockIter {
            iter: &mut roll_mock.into_iter(),
        });
        assert_eq!(12, p.total());
        assert_eq!(Some(&[3, 5][..]), p.terms()[0].partials());
        assert_eq!(Some(&[7][..]), p.terms()[1].partials());
    }

    #[test]
    fn negative_group_test() {
        let mut p = parse_pouch("10 - 2d4");
        let roll_mock = vec![4, 1];
        p.roll_with_source(&mut MockIter {
            iter: &mut roll_mock.into_iter(),
        });
        assert_eq!(5, p.total());
    }

    #[test]
    fn reroll_overwrites_test() {
        let mut p = parse_pouch("3d6+1");
        let roll_mock = vec![1, 2, 3, 6, 6, 6];
        let mut source = MockIter {
            iter: &mut roll_mock.into_iter(),
        };
        p.roll_with_source(&mut source);
        assert_eq!(7, p.total());
        p.roll_with_source(&mut source);
        assert_eq!(19, p.total());
        assert_eq!(vec![3, 0], partials_len(&p));
    }

    #[test]
    fn repeated_roll_keeps_shape_test() {
        let mut p = parse_pouch("20d20-5+d4");
        let mut rng = StdRng::seed_from_u64(7);
        p.roll_with(&mut rng);
        let first = p.terms()[0].partials().unwrap().to_vec();
        p.roll_with(&mut rng);
        let second = p.terms()[0].partials().unwrap().to_vec();
        assert_eq!(3, p.len());
        assert_eq!(vec![20, 0, 1], partials_len(&p));
        assert_ne!(first, second);
        assert_eq!(-5, p.terms()[1].total());
    }

    #[test]
    fn outcomes_in_range_test() {
        let mut p = parse_pouch("50d3");
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            p.roll_with(&mut rng);
            let results = p.terms()[0].as_dice().unwrap().results();
            assert!(results.iter().all(|r| (1..=3).contains(r)));
        }
    }

    #[test]
    fn single_term_roll_test() {
        let mut p = parse_pouch("2d6+4");
        let roll_mock = vec![6, 6];
        p.terms_mut()[0].roll_with_source(&mut MockIter {
            iter: &mut roll_mock.into_iter(),
        });
        assert_eq!(16, p.total());
    }

    #[test]
    fn term_render_test() {
        let p = parse_pouch("d8-1-2d6+2+0");
        let rendered = p.terms().iter().map(|t| t.to_string()).collect::<Vec<_>>();
        assert_eq!(vec!["+1d8", "-1", "-2d6", "+2", "+0"], rendered);
    }

    #[test]
    fn pouch_render_test() {
        let mut p = parse_pouch("2d6-1");
        let roll_mock = vec![3, 5];
        p.roll_with_source(&mut MockIter {
            iter: &mut roll_mock.into_iter(),
        });
        let expected = "+2d6   =   +8 [3, 5]\n\
                        -1     =   -1\n\
                        -------------------------\n\
                        Total  =   +7";
        assert_eq!(expected, p.render());
    }

    #[test]
    fn render_single_total_line_test() {
        for src in ["", "d20", "4d6-2+1d4", "+", "hello", "3d8 + 12 - d6"] {
            let mut p = parse_pouch(src);
            p.roll();
            let out = p.render();
            assert_eq!(1, out.lines().filter(|l| l.contains("Total")).count());
            assert_eq!(p.len() + 2, out.lines().count());
        }
    }

    #[test]
    fn source_kept_test() {
        let p = parse_pouch("2d6 + 3");
        assert_eq!("2d6 + 3", p.as_str());
        assert_eq!(2, (&p).into_iter().count());
    }

    #[test]
    fn from_str_test() {
        let p: Pouch = "1d20+5".parse().unwrap();
        assert_eq!(2, p.len());
        assert!("1d20+x".parse::<Pouch>().is_err());
    }
}
