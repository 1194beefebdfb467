use facelet_core::{
    Color, Cube, DEFAULT_SCRAMBLE_LENGTH, Face, Move, MoveSequence, ParseMoveError, Session,
    apply_move, apply_sequence, invert_sequence, parse_move, scramble,
};

const SOLVED: &str = "wwwwwwwwwrrrrrrrrrgggggggggyyyyyyyyyooooooooobbbbbbbbb";

fn random_state(rng: &mut fastrand::Rng) -> Cube {
    let mut cube = Cube::new();
    let length = rng.usize(0..40);
    cube.apply_moves(&scramble(rng, length));
    cube
}

#[test_log::test]
fn solved_round_trip() {
    let serialized = Cube::new().serialize();
    assert_eq!(serialized, SOLVED);
    for (face, block) in Face::ALL.into_iter().zip(serialized.as_bytes().chunks(9)) {
        assert!(block.iter().all(|&symbol| symbol as char == face.color().symbol()));
    }
}

#[test_log::test]
fn color_counts_are_preserved() {
    let mut rng = fastrand::Rng::with_seed(0xC0105);
    for _ in 0..200 {
        let cube = random_state(&mut rng);
        for color in Color::ALL {
            assert_eq!(cube.count(color), 9, "{cube}");
        }
        // Centers never move
        for face in Face::ALL {
            assert_eq!(cube.face(face)[4], face.color());
        }
    }
}

#[test_log::test]
fn inverse_law() {
    let mut rng = fastrand::Rng::with_seed(0x1A7);
    for _ in 0..200 {
        let start = random_state(&mut rng);
        let length = rng.usize(0..30);
        let moves = scramble(&mut rng, length);

        let mut cube = start.clone();
        cube.apply_moves(&moves);
        cube.apply_moves(&invert_sequence(moves.moves()));
        assert_eq!(cube.serialize(), start.serialize(), "{moves}");
    }
}

#[test_log::test]
fn inverse_law_through_tokens() {
    let tokens = ["F", "R'", "U", "B", "L'", "D", "D", "R"];
    let mut cube = Cube::new();
    apply_sequence(&mut cube, &tokens).unwrap();
    assert_ne!(cube.serialize(), SOLVED);

    let moves: Vec<Move> = tokens.iter().map(|token| parse_move(token).unwrap()).collect();
    let inverse: Vec<String> = invert_sequence(&moves)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(inverse, ["R'", "D'", "D'", "L", "B'", "U'", "R", "F'"]);
    apply_sequence(&mut cube, &inverse).unwrap();
    assert_eq!(cube.serialize(), SOLVED);
}

#[test_log::test]
fn four_turns_are_identity() {
    let mut rng = fastrand::Rng::with_seed(4);
    for _ in 0..20 {
        let start = random_state(&mut rng);
        for move_ in Move::ALL {
            let mut cube = start.clone();
            for _ in 0..4 {
                cube.turn(move_);
            }
            assert_eq!(cube, start, "{move_}");
        }
    }
}

#[test_log::test]
fn move_then_inverse_is_identity() {
    let mut rng = fastrand::Rng::with_seed(2);
    let start = random_state(&mut rng);
    for face in Face::ALL {
        let mut cube = start.clone();
        apply_move(&mut cube, &face.to_string()).unwrap();
        assert_ne!(cube, start);
        apply_move(&mut cube, &format!("{face}'")).unwrap();
        assert_eq!(cube, start, "{face}");
    }
}

#[test_log::test]
fn commutator_has_order_six() {
    let moves: MoveSequence = "R U R' U'".parse().unwrap();
    let mut cube = Cube::new();
    for i in 1..=6 {
        cube.apply_moves(&moves);
        assert_eq!(cube.is_solved(), i == 6);
    }
}

#[test_log::test]
fn opposite_faces_commute() {
    for (a, b) in [(Face::U, Face::D), (Face::R, Face::L), (Face::F, Face::B)] {
        let mut ab = Cube::new();
        ab.apply_turn(a, true);
        ab.apply_turn(b, true);

        let mut ba = Cube::new();
        ba.apply_turn(b, true);
        ba.apply_turn(a, true);

        assert_eq!(ab, ba, "{a} {b}");
    }
}

#[test_log::test]
fn scramble_then_solve() {
    let mut session = Session::new();
    let mut rng = fastrand::Rng::with_seed(20);
    session.scramble(&mut rng, DEFAULT_SCRAMBLE_LENGTH);
    assert_eq!(session.log().len(), 20);

    let solution = session.solution().unwrap();
    assert_eq!(solution, session.log().inverse());

    let mut cube = session.cube().clone();
    cube.apply_moves(&solution);
    assert_eq!(cube.serialize(), SOLVED);

    let mut playback = session.solve().unwrap();
    playback.finish();
    assert_eq!(session.cube().serialize(), SOLVED);
    assert!(session.log().is_empty());
}

#[test_log::test]
fn invalid_token_leaves_cube_unchanged() {
    assert_eq!(
        parse_move("X"),
        Err(ParseMoveError::InvalidMoveToken {
            token: "X".to_owned()
        })
    );

    let mut rng = fastrand::Rng::with_seed(9);
    let mut cube = random_state(&mut rng);
    let before = cube.serialize();
    assert!(apply_move(&mut cube, "X").is_err());
    assert_eq!(cube.serialize(), before);
}

#[test_log::test]
fn labeled_r_turn_follows_rotation() {
    let mut cube = Cube::from_fn(|face, index| (face, index));
    cube.apply_turn(Face::R, true);
    let expected = [6, 3, 0, 7, 4, 1, 8, 5, 2].map(|index| (Face::R, index));
    assert_eq!(cube.face(Face::R), &expected);
    assert_eq!(
        cube.face(Face::L),
        &std::array::from_fn(|index| (Face::L, index))
    );
}
