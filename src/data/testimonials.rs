#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub image_url: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "1",
        name: "Sarah Thompson",
        role: "Parent",
        content: "TinyNinza has been a game-changer for my 5-year-old. She's learning math concepts while having so much fun that she doesn't even realize she's studying!",
        image_url: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Testimonial {
        id: "2",
        name: "Michael Rodriguez",
        role: "Elementary Teacher",
        content: "I recommend TinyNinza to all parents at our school. The curriculum-aligned games perfectly complement what we teach in the classroom.",
        image_url: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Testimonial {
        id: "3",
        name: "Jessica Chen",
        role: "Parent",
        content: "As a working mom, I love that TinyNinza is both educational and entertaining. My son can play independently while actually learning something valuable.",
        image_url: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Testimonial {
        id: "4",
        name: "David Wilson",
        role: "Early Childhood Educator",
        content: "The thoughtful design of TinyNinza games promotes critical thinking and problem-solving skills that are crucial for early development.",
        image_url: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];
