use mindtrack_core::Theme;
use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Colors the renderer needs from a theme.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub date: Color,
    pub rating: Color,
    pub marked: Color,
    pub muted: Color,
}

pub struct OneDark;

impl OneDark {
    pub const PALETTE: Palette = Palette {
        bg: Color::Rgb {
            r: 0x28,
            g: 0x2C,
            b: 0x34,
        }, // #282C34
        fg: Color::Rgb {
            r: 0xAB,
            g: 0xB2,
            b: 0xBF,
        }, // #ABB2BF
        accent: Color::Rgb {
            r: 0x61,
            g: 0xAF,
            b: 0xEF,
        }, // #61AFEF
        date: Color::Rgb {
            r: 0x56,
            g: 0xB6,
            b: 0xC2,
        }, // #56B6C2
        rating: Color::Rgb {
            r: 0xE5,
            g: 0xC0,
            b: 0x7B,
        }, // #E5C07B
        marked: Color::Rgb {
            r: 0x98,
            g: 0xC3,
            b: 0x79,
        }, // #98C379
        muted: Color::Rgb {
            r: 0x5C,
            g: 0x63,
            b: 0x70,
        }, // #5C6370
    };
}

pub struct OneLight;

impl OneLight {
    pub const PALETTE: Palette = Palette {
        bg: Color::Rgb {
            r: 0xFA,
            g: 0xFA,
            b: 0xFA,
        }, // #FAFAFA
        fg: Color::Rgb {
            r: 0x38,
            g: 0x3A,
            b: 0x42,
        }, // #383A42
        accent: Color::Rgb {
            r: 0x40,
            g: 0x78,
            b: 0xF2,
        }, // #4078F2
        date: Color::Rgb {
            r: 0x01,
            g: 0x84,
            b: 0xBC,
        }, // #0184BC
        rating: Color::Rgb {
            r: 0xC1,
            g: 0x84,
            b: 0x01,
        }, // #C18401
        marked: Color::Rgb {
            r: 0x50,
            g: 0xA1,
            b: 0x4F,
        }, // #50A14F
        muted: Color::Rgb {
            r: 0xA0,
            g: 0xA1,
            b: 0xA7,
        }, // #A0A1A7
    };
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => OneDark::PALETTE,
        Theme::Light => OneLight::PALETTE,
    }
}

pub fn skin(palette: &Palette) -> MadSkin {
    let mut skin = MadSkin::default();

    skin.paragraph.set_fg(palette.fg);
    skin.bold.set_fg(palette.fg);
    skin.italic.set_fg(palette.fg);

    skin.headers[0].set_fg(palette.accent);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[0].align = Alignment::Left;

    skin.headers[1].set_fg(palette.date);
    skin.headers[1].add_attr(Attribute::Bold);

    skin.headers[2].set_fg(palette.rating);
    skin.headers[2].add_attr(Attribute::Bold);

    skin.table.set_fg(palette.muted);
    skin.bullet.set_fg(palette.accent);
    skin.quote_mark.set_char('┃');
    skin.quote_mark.set_fg(palette.muted);
    skin.inline_code.set_fg(palette.rating);
    skin.inline_code.set_bg(palette.bg);
    skin.code_block.set_fg(palette.marked);
    skin.code_block.set_bg(palette.bg);

    skin
}
