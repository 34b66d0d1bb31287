//! Built-in timeline shown when no periods file is given.

use crate::period::{Period, Timeline, DEFAULT_TITLE};

/// The bundled periods, in display order.
pub fn builtin_periods() -> Vec<Period> {
    vec![
        Period::new(1957, 1969, "Space")
            .event(1957, "Sputnik 1, the first artificial satellite, reaches orbit")
            .event(1961, "Yuri Gagarin becomes the first human in space")
            .event(1965, "Alexei Leonov performs the first spacewalk")
            .event(1966, "Luna 9 makes the first soft landing on the Moon")
            .event(1969, "Apollo 11 lands the first crew on the Moon"),
        Period::new(1971, 1984, "Computing")
            .event(1971, "Intel ships the 4004, the first commercial microprocessor")
            .event(1973, "Xerox PARC builds the Alto with a graphical interface")
            .event(1976, "The Apple I goes on sale")
            .event(1981, "IBM introduces the Personal Computer")
            .event(1984, "Apple launches the Macintosh"),
        Period::new(1987, 1991, "Cinema")
            .event(1987, "Predator, directed by John McTiernan")
            .event(1988, "Who Framed Roger Rabbit mixes live action and animation")
            .event(1989, "Back to the Future Part II")
            .event(1990, "Home Alone becomes a holiday classic")
            .event(1991, "Terminator 2: Judgment Day"),
        Period::new(1989, 1998, "The Web")
            .event(1989, "Tim Berners-Lee proposes the World Wide Web at CERN")
            .event(1991, "The first website goes online")
            .event(1993, "The Mosaic browser popularises the web")
            .event(1995, "JavaScript ships in Netscape Navigator")
            .event(1998, "Google is founded"),
        Period::new(2006, 2014, "Sport")
            .event(2006, "Italy wins the FIFA World Cup in Germany")
            .event(2008, "The Summer Olympics are held in Beijing")
            .event(2010, "Spain wins its first FIFA World Cup")
            .event(2012, "London hosts the Summer Olympics for a third time")
            .event(2014, "Germany wins the FIFA World Cup in Brazil"),
        Period::new(2015, 2022, "Science")
            .event(2015, "LIGO detects gravitational waves from merging black holes")
            .event(2016, "AlphaGo defeats Lee Sedol at Go")
            .event(2017, "A neutron star merger is observed in gravitational and light waves")
            .event(2019, "The Event Horizon Telescope images the M87 black hole")
            .event(2020, "AlphaFold 2 predicts protein structures at CASP14")
            .event(2022, "The James Webb Space Telescope releases its first images"),
    ]
}

/// The bundled timeline.
pub fn builtin_timeline() -> Timeline {
    Timeline::from_static(DEFAULT_TITLE, builtin_periods())
}
